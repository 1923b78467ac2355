//! Pattern compilation for exclusion rules.
//!
//! A raw pattern string (exact name, `*`-glob, or gitignore line) compiles
//! into a [`Rule`] whose matcher is evaluated against entry names. Matching
//! is always whole-name and case-insensitive; a pattern like `temp` never
//! matches `template.js`.

use regex::Regex;

/// Where a rule came from. Source order decides precedence: negations from
/// the ignore source cannot override built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    Default,
    User,
    Ignore,
}

/// How a rule matches a name.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Whole-name equality, case-insensitive.
    Exact,
    /// Trailing-slash pattern: exact directory-name match at any depth.
    Directory,
    /// `*`/`?` pattern compiled to an anchored case-insensitive regex.
    Glob(Regex),
}

/// A single compiled exclusion rule. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Original pattern text, negation marker and trailing slash stripped.
    pub pattern: String,
    pub kind: RuleKind,
    pub source: RuleSource,
    /// Set for gitignore `!pattern` lines; evaluated as override removals.
    pub negated: bool,
    lowered: String,
}

impl Rule {
    /// Compile a raw pattern. Never fails: a glob that does not translate to
    /// a valid regex degrades to an exact match on the literal pattern text,
    /// so one bad line cannot abort evaluation of the rest.
    pub fn compile(raw: &str, source: RuleSource) -> Self {
        let (negated, body) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (kind, pattern) = if body.len() > 1 && body.ends_with('/') {
            (RuleKind::Directory, body.trim_end_matches('/').to_string())
        } else if body.contains('*') || body.contains('?') {
            match glob_to_regex(body) {
                Ok(regex) => (RuleKind::Glob(regex), body.to_string()),
                Err(err) => {
                    tracing::debug!("pattern '{}' fell back to exact match: {}", body, err);
                    (RuleKind::Exact, body.to_string())
                }
            }
        } else {
            (RuleKind::Exact, body.to_string())
        };

        let lowered = pattern.to_lowercase();
        Rule { pattern, kind, source, negated, lowered }
    }

    /// Test an entry name against this rule. Evaluation is a single match
    /// over the kind tag, not virtual dispatch.
    pub fn matches(&self, name: &str) -> bool {
        match &self.kind {
            RuleKind::Exact | RuleKind::Directory => name.to_lowercase() == self.lowered,
            RuleKind::Glob(regex) => regex.is_match(name),
        }
    }
}

/// Translate a simple glob to an anchored case-insensitive regex.
/// `*` matches any run of characters, `?` exactly one; everything else is
/// escaped so `.` in `*.log` stays literal.
fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push_str("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4]))),
        }
    }
    expr.push('$');
    Regex::new(&expr)
}
