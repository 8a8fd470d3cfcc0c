use crate::core::error::{ConfigError, InfraError, InfraResult, ResultExt};
use crate::io::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name written by `railjson init`
pub const CONFIG_FILE_NAME: &str = "railjson.toml";

const MAX_INDENT: usize = 16;

/// Configuration for railjson-gen
/// Searched in order: railjson.toml, .railjson.toml, .config/railjson.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
  #[serde(default)]
  pub output: OutputConfig,
  #[serde(default)]
  pub validation: ValidationConfig,
}

/// How generated documents are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
  /// Spaces per indentation level (default: 4)
  #[serde(default = "default_indent")]
  pub indent: usize,

  /// Default output path when `generate` gets no `--output`
  #[serde(default)]
  pub path: Option<PathBuf>,
}

fn default_indent() -> usize {
  DEFAULT_INDENT
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      indent: default_indent(),
      path: None,
    }
  }
}

/// Validation policy applied by `generate` and `check`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
  /// Treat warnings as failures
  #[serde(default)]
  pub fail_on_warnings: bool,

  /// Always run expensive checks (same as passing --thorough)
  #[serde(default)]
  pub thorough: bool,

  /// Checks to skip, by name (e.g. ["track-connectivity"])
  #[serde(default)]
  pub disabled_checks: Vec<String>,
}

impl ValidationConfig {
  pub fn is_disabled(&self, check_name: &str) -> bool {
    self.disabled_checks.iter().any(|name| name == check_name)
  }
}

impl GeneratorConfig {
  /// Find config file in search order: railjson.toml, .railjson.toml, .config/railjson.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join(CONFIG_FILE_NAME),
      path.join(".railjson.toml"),
      path.join(".config").join(CONFIG_FILE_NAME),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config (searches multiple locations)
  pub fn load(path: &Path) -> InfraResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      InfraError::Config(ConfigError::NotFound {
        root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: GeneratorConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config.validate()?;

    tracing::debug!(path = %config_path.display(), "loaded configuration");
    Ok(config)
  }

  /// Load config if present, defaults otherwise
  pub fn load_or_default(path: &Path) -> InfraResult<Self> {
    if Self::exists(path) {
      Self::load(path)
    } else {
      Ok(Self::default())
    }
  }

  /// Save config to railjson.toml (default location)
  pub fn save(&self, path: &Path) -> InfraResult<PathBuf> {
    let config_path = path.join(CONFIG_FILE_NAME);
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(config_path)
  }

  /// Check if config exists at the given path
  pub fn exists(path: &Path) -> bool {
    Self::find_config_path(path).is_some()
  }

  pub fn validate(&self) -> InfraResult<()> {
    if self.output.indent > MAX_INDENT {
      return Err(InfraError::Config(ConfigError::InvalidValue {
        field: "output.indent".to_string(),
        reason: format!("{} exceeds the maximum of {}", self.output.indent, MAX_INDENT),
      }));
    }

    let known = crate::checks::create_default_runner();
    for name in &self.validation.disabled_checks {
      if !known.checks().iter().any(|check| check.name() == name) {
        return Err(InfraError::Config(ConfigError::InvalidValue {
          field: "validation.disabled_checks".to_string(),
          reason: format!("unknown check '{}'", name),
        }));
      }
    }

    Ok(())
  }
}
