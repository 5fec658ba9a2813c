//! Configuration for the `semver-tool` binary
//!
//! Sources are layered in this order, later ones winning:
//! 1. Default values (lenient numbers, pretty JSON)
//! 2. `semver-tool.toml`, `.semver-tool.toml`, `config/semver-tool.toml`
//! 3. `semver-tool.toml` in the platform config dir (`directories`)
//! 4. The file passed to `--config`
//! 5. Environment variables, `SEMVER_TOOL__<SECTION>__<KEY>`:
//!
//! ```text
//! SEMVER_TOOL__PARSER__NUMERIC=strict
//! SEMVER_TOOL__OUTPUT__FORMAT=compact
//! ```
//!
//! ## Example config file (semver-tool.toml):
//! ```toml
//! [parser]
//! numeric = "strict"
//!
//! [output]
//! format = "compact"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::parser::{NumericMode, Parser};

/// Main configuration for the tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parser configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How numeric fragments are read
    #[serde(default)]
    pub numeric: NumericMode,
}

impl ParserConfig {
    pub fn parser(&self) -> Parser {
        Parser::new(self.numeric)
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON output format (pretty or compact)
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl OutputFormat {
    pub fn render<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
    }
}

impl ToolConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, with an explicit file layered over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "semver-tool.toml",
            ".semver-tool.toml",
            "config/semver-tool.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        let project_dirs = directories::ProjectDirs::from("dev", "tagged-semver", "semver-tool");
        if let Some(config_dir) = project_dirs {
            let xdg_config = config_dir.config_dir().join("semver-tool.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SEMVER_TOOL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.parser.numeric, NumericMode::Lenient);
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let config = ToolConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[parser]"));
        assert!(toml_str.contains("numeric = \"lenient\""));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let path = path.to_str().unwrap();

        let mut config = ToolConfig::default();
        config.parser.numeric = NumericMode::Strict;
        config.output.format = OutputFormat::Compact;
        config.save(path).unwrap();

        let loaded = ToolConfig::load_from(Some(path)).unwrap();
        assert_eq!(loaded.parser.numeric, NumericMode::Strict);
        assert_eq!(loaded.output.format, OutputFormat::Compact);
        assert_eq!(loaded.parser.parser().numeric_mode(), NumericMode::Strict);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lenient.toml");
        let path = path.to_str().unwrap();
        ToolConfig::default().save(path).unwrap();

        std::env::set_var("SEMVER_TOOL__PARSER__NUMERIC", "strict");
        std::env::set_var("SEMVER_TOOL__OUTPUT__FORMAT", "compact");
        let loaded = ToolConfig::load_from(Some(path));
        std::env::remove_var("SEMVER_TOOL__PARSER__NUMERIC");
        std::env::remove_var("SEMVER_TOOL__OUTPUT__FORMAT");

        let loaded = loaded.unwrap();
        assert_eq!(loaded.parser.numeric, NumericMode::Strict);
        assert_eq!(loaded.output.format, OutputFormat::Compact);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ToolConfig::load_from(path.to_str()).is_err());
    }

    #[test]
    fn test_compact_render() {
        let rendered = OutputFormat::Compact.render(&vec![1, 2]).unwrap();
        assert_eq!(rendered, "[1,2]");
    }
}
