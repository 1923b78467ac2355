//! Layered exclusion policy.
//!
//! Merges built-in defaults, user-configured patterns, and ignore-source
//! lines into one ordered rule set. This is the single authority consulted by
//! the tree builder; no other component keeps its own exclusion list.

use std::path::Path;

use crate::filter::gitignore;
use crate::filter::rule::{Rule, RuleSource};
use crate::fs::FileSystem;

/// Ordered exclusion rule set.
///
/// Rule order is construction order: defaults first, then user patterns, then
/// ignore-source positives. Negating ignore-source lines are held separately
/// and always evaluated last.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    rules: Vec<Rule>,
    negations: Vec<Rule>,
}

impl ExclusionPolicy {
    /// Build a policy from an explicit default table plus user patterns.
    ///
    /// The default table is passed in (normally
    /// [`crate::filter::defaults::DEFAULT_EXCLUDES`]) so tests can substitute
    /// their own. Compilation never fails; malformed patterns degrade to
    /// literal matches.
    pub fn new(defaults: &[&str], user_patterns: &[String]) -> Self {
        let mut rules = Vec::with_capacity(defaults.len() + user_patterns.len());
        for pattern in defaults {
            rules.push(Rule::compile(pattern, RuleSource::Default));
        }
        for pattern in user_patterns {
            rules.push(Rule::compile(pattern, RuleSource::User));
        }
        Self { rules, negations: Vec::new() }
    }

    /// Append rules parsed from ignore-source lines. Non-negating lines
    /// become positive rules; `!pattern` lines are recorded as negations.
    pub fn add_ignore_lines(&mut self, lines: &[String]) {
        for line in lines {
            let rule = Rule::compile(line, RuleSource::Ignore);
            if rule.negated {
                self.negations.push(rule);
            } else {
                self.rules.push(rule);
            }
        }
    }

    /// Build a policy for a project root, seeding ignore-source rules from
    /// the `.gitignore` at that root. A missing or unreadable ignore file
    /// contributes zero rules.
    pub async fn for_root<F: FileSystem>(
        fs: &F,
        root: &Path,
        defaults: &[&str],
        user_patterns: &[String],
    ) -> Self {
        let mut policy = Self::new(defaults, user_patterns);
        let lines = gitignore::read(fs, root).await;
        if !lines.is_empty() {
            tracing::debug!("loaded {} ignore patterns from {}", lines.len(), root.display());
        }
        policy.add_ignore_lines(&lines);
        policy
    }

    /// Decide whether an entry name is excluded.
    ///
    /// Rules run in source order. A match from a built-in default is final:
    /// a negated ignore line cannot resurrect a name the defaults exclude.
    /// Otherwise a name is excluded iff some positive rule matches and no
    /// negation matches. Case-insensitive on every platform; never panics.
    pub fn is_excluded(&self, name: &str) -> bool {
        let mut positive_hit = false;
        for rule in &self.rules {
            if rule.matches(name) {
                if rule.source == RuleSource::Default {
                    return true;
                }
                positive_hit = true;
            }
        }

        positive_hit && !self.negations.iter().any(|rule| rule.matches(name))
    }

    /// Total number of compiled rules, negations included.
    pub fn rule_count(&self) -> usize {
        self.rules.len() + self.negations.len()
    }
}
