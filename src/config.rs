use crate::error::{ConfigError, Result};
use crate::output::OutputFormat;
use crate::ranking::OrderingOptions;
use console::style;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ordering: OrderingOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `"text"` or `"json"`
    pub format: OutputFormat,
}

impl Config {
    /// Explicit path, else `.ec2names.toml` in the current directory, else
    /// `~/.config/ec2names/config.toml`. Missing files yield defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            let local = PathBuf::from(".ec2names.toml");
            if local.exists() {
                local
            } else {
                dirs::config_dir()
                    .map(|d| d.join("ec2names").join("config.toml"))
                    .unwrap_or(local)
            }
        };

        if !config_path.exists() {
            if path.is_some() {
                tracing::warn!(
                    "Config file not found: {}; using default ordering. Run 'ec2names init' to create one.",
                    config_path.display()
                );
            }
            return Ok(Config::default());
        }

        tracing::debug!("Loading config from {}", config_path.display());
        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Order lists must not repeat an entry
    pub fn validate(&self) -> Result<()> {
        check_unique("ordering.family_order", self.ordering.family_order.as_deref())?;
        check_unique("ordering.suffix_order", self.ordering.suffix_order.as_deref())?;
        Ok(())
    }
}

fn check_unique(field: &str, order: Option<&[String]>) -> Result<()> {
    let Some(order) = order else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    for entry in order {
        if !seen.insert(entry.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: format!("'{}' is listed more than once", entry),
            }
            .into());
        }
    }
    Ok(())
}

/// Write a config carrying the built-in class-bucket ordering
pub fn init_config(output: &Path) -> Result<()> {
    let config = Config {
        ordering: OrderingOptions::class_buckets(),
        ..Config::default()
    };
    config.save(output)?;
    println!("{} {}", style("Created config file:").green(), output.display());
    Ok(())
}
