//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use turbo_commerce::Currency;
use turbo_observability::{LogFormat, LogLevel};
use turbo_theme::DEFAULT_THEME_KEY;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["turbo.toml", ".turbo.toml", "turbo.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if Currency::from_code(&self.storefront.currency).is_none() {
            errors.push(format!(
                "storefront.currency '{}' is not a supported currency",
                self.storefront.currency
            ));
        }

        if self.storefront.theme_key.trim().is_empty() {
            errors.push("storefront.theme_key must not be empty".to_string());
        }

        if self.storefront.store_path.trim().is_empty() {
            errors.push("storefront.store_path must not be empty".to_string());
        }

        if !(1..=6).contains(&self.storefront.columns) {
            warnings.push(format!(
                "storefront.columns {} is outside 1-6 and will be clamped",
                self.storefront.columns
            ));
        }

        if let Err(e) = self.logging.level.parse::<LogLevel>() {
            errors.push(format!("logging.level: {}", e));
        }

        if let Err(e) = self.logging.format.parse::<LogFormat>() {
            errors.push(format!("logging.format: {}", e));
        }

        (errors, warnings)
    }
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Currency code for price labels.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Key the theme preference is persisted under.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// Key-value store file, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Grid columns on large screens.
    #[serde(default = "default_columns")]
    pub columns: u8,
}

fn default_currency() -> String {
    Currency::INR.code().to_string()
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

fn default_store_path() -> String {
    ".turbo/store.json".to_string()
}

fn default_columns() -> u8 {
    3
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            theme_key: default_theme_key(),
            store_path: default_store_path(),
            columns: default_columns(),
        }
    }
}

impl StorefrontConfig {
    /// Configured currency, falling back to the default for unknown codes.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or_default()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (human, json).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> LogLevel {
        self.level.parse().unwrap_or_default()
    }

    pub fn format(&self) -> LogFormat {
        self.format.parse().unwrap_or_default()
    }
}

/// Generate a default turbo.toml config file.
pub fn generate_default_config() -> String {
    r#"# TurboCommerce storefront configuration

[storefront]
currency = "INR"
theme_key = "theme"
store_path = ".turbo/store.json"
columns = 3

[logging]
level = "info"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        let defaults = CliConfig::default();
        assert_eq!(parsed.storefront.currency, defaults.storefront.currency);
        assert_eq!(parsed.storefront.theme_key, "theme");
        assert_eq!(parsed.storefront.store_path, defaults.storefront.store_path);
        assert_eq!(parsed.storefront.columns, 3);
        assert_eq!(parsed.logging.level(), LogLevel::Info);
        assert_eq!(parsed.logging.format(), LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: CliConfig = toml::from_str("[storefront]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(parsed.storefront.currency(), Currency::USD);
        assert_eq!(parsed.storefront.theme_key, "theme");
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_check_reports_problems() {
        let mut config = CliConfig::default();
        assert_eq!(config.check(), (Vec::new(), Vec::new()));

        config.storefront.currency = "XYZ".to_string();
        config.storefront.columns = 9;
        config.logging.level = "loud".to_string();
        let (errors, warnings) = config.check();
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
