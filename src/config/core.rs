use anyhow::Result;
use figment::{Figment, providers::{Format, Toml, Json, Yaml, Env}};
use serde::Deserialize;

use crate::tree::TreeOptions;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Merged configuration, lowest to highest priority: embedded defaults,
/// user config, repository config, environment variables.
pub struct FtreeConfig {
    figment: Figment,
}

/// Typed view of the settings the tree commands consume.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub tree: TreeSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralSettings {
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeSettings {
    pub max_depth: usize,
    pub show_file_size: bool,
    pub show_file_date: bool,
    pub concurrency: usize,
    pub exclude: Vec<String>,
    pub respect_gitignore: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub format: String,
}

impl TreeSettings {
    pub fn to_options(&self) -> TreeOptions {
        TreeOptions {
            max_depth: self.max_depth,
            show_file_size: self.show_file_size,
            show_file_date: self.show_file_date,
            concurrency: self.concurrency,
        }
    }
}

impl FtreeConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG));  // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            let extension = std::path::Path::new(custom_path)
                .extension()
                .and_then(|e| e.to_str());
            figment = match extension {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                .merge(Toml::file("ftree.toml"))
                .merge(Json::file("ftree.json"))
                .merge(Yaml::file("ftree.yaml"))
                .merge(Yaml::file("ftree.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("FTREE_"));

        Ok(FtreeConfig { figment })
    }

    /// Extract the typed settings the commands run on.
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.figment.extract()?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/ftree/config.toml", home),
            Err(_) => "~/.config/ftree/config.toml".to_string(),
        }
    }
}
