use anyhow::Context;
use serde::{Deserialize, Serialize};
use sitecraft_editor::FileStore;
use sitecraft_renderer::HtmlOptions;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitecraft.config.json";

/// Sitecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<project>.json` payloads
    #[serde(default = "default_projects_dir")]
    pub projects_dir: String,

    /// Directory rendered pages are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// HTML output options
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_projects_dir() -> String {
    "projects".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default = "default_indent")]
    pub indent: String,

    /// `<title>` of published pages
    #[serde(default = "default_title")]
    pub title: String,

    /// Stylesheet linked from published pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> String {
    "  ".to_string()
}

fn default_title() -> String {
    HtmlOptions::default().title
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
            title: default_title(),
            stylesheet: None,
        }
    }
}

impl RenderConfig {
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            pretty: self.pretty,
            indent: self.indent.clone(),
            title: self.title.clone(),
            stylesheet: self.stylesheet.clone(),
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", DEFAULT_CONFIG_NAME))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the projects directory
    pub fn get_projects_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.projects_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn store(&self, cwd: &str) -> FileStore {
        FileStore::new(self.get_projects_dir(cwd))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            out_dir: default_out_dir(),
            render: RenderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "projectsDir": "content",
            "outDir": "public",
            "render": { "pretty": false, "title": "Acme" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.projects_dir, "content");
        assert_eq!(config.out_dir, "public");
        assert!(!config.render.pretty);
        assert_eq!(config.render.title, "Acme");
        assert_eq!(config.render.indent, "  ");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.projects_dir, "projects");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.render.html_options(), HtmlOptions::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_without_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();
        assert!(Config::load(&dir.path().display().to_string()).is_err());
    }
}
