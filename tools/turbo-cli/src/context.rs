//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use turbo_cache::Cache;
use turbo_observability::StructuredLogger;
use turbo_theme::{EnvColorScheme, ThemeStore};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config was loaded from, if any.
    pub config_file: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try the current directory, then its parents
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_file,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Logger configured from `[logging]`.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            turbo_observability::LogLevel::Debug
        } else {
            self.config.logging.level()
        };
        StructuredLogger::new("turbo-cli")
            .with_min_level(level)
            .with_format(self.config.logging.format())
    }

    /// Key-value store at `storefront.store_path`.
    pub fn cache(&self) -> Result<Cache> {
        let path = self.resolve_path(&self.config.storefront.store_path);
        Cache::open_file(&path)
            .with_context(|| format!("Failed to open store: {}", path.display()))
    }

    /// Theme store over `cache`, resolving the system preference from the
    /// environment.
    pub fn theme_store(&self, cache: Cache) -> ThemeStore {
        ThemeStore::builder(cache)
            .key(self.config.storefront.theme_key.as_str())
            .color_scheme(EnvColorScheme::new())
            .logger(&self.logger())
            .initialize()
    }
}
