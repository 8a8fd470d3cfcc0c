//! Errors and exit codes for railjson-gen
//!
//! Conversion itself never fails: identity conflicts are reported as data by
//! the checks, and a track-owned object cannot be rendered without its track.
//! The errors below cover everything around the conversion: reading
//! descriptions, loading configuration, writing documents and failed checks.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Process exit status of the `railjson` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Bad input: config, arguments or description
  User = 1,
  /// Bare I/O failure
  System = 2,
  /// Blocking check failures or an unreadable document version
  Validation = 3,
}

impl ExitCode {
  pub fn code(self) -> i32 {
    self as i32
  }
}

#[derive(Debug)]
pub enum InfraError {
  Config(ConfigError),
  Description(DescriptionError),
  Validation(ValidationError),
  Io(io::Error),
  /// Free-form failure; `context` lines are outermost first
  Other {
    message: String,
    context: Vec<String>,
    help: Option<String>,
  },
}

impl InfraError {
  pub fn message(message: impl Into<String>) -> Self {
    InfraError::Other {
      message: message.into(),
      context: Vec::new(),
      help: None,
    }
  }

  pub fn with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
    InfraError::Other {
      message: message.into(),
      context: Vec::new(),
      help: Some(help.into()),
    }
  }

  /// Prepend a context line; typed errors other than `Io` are returned unchanged
  pub fn context(self, line: impl Into<String>) -> Self {
    match self {
      InfraError::Other {
        message,
        mut context,
        help,
      } => {
        context.insert(0, line.into());
        InfraError::Other { message, context, help }
      }
      InfraError::Io(err) => InfraError::Other {
        message: format!("I/O error: {}", err),
        context: vec![line.into()],
        help: None,
      },
      typed => typed,
    }
  }

  pub fn exit_code(&self) -> ExitCode {
    match self {
      InfraError::Validation(_) => ExitCode::Validation,
      InfraError::Io(_) => ExitCode::System,
      InfraError::Config(_) | InfraError::Description(_) | InfraError::Other { .. } => ExitCode::User,
    }
  }

  /// Hint printed under the error, if any
  pub fn help(&self) -> Option<String> {
    let hint = match self {
      InfraError::Config(ConfigError::NotFound { .. }) => "Run `railjson init` to create a configuration file.",
      InfraError::Config(ConfigError::AlreadyExists { .. }) => "Pass --force to overwrite the existing file.",
      InfraError::Description(DescriptionError::UnsupportedFormat { .. }) => {
        "Infrastructure descriptions must be .toml or .json files."
      }
      InfraError::Description(DescriptionError::Malformed { .. }) => {
        "Check the description against the track/switch/route layout documented in README.md."
      }
      InfraError::Validation(ValidationError::ChecksFailed { .. }) => {
        "Run `railjson check <INPUT>` for details, or pass --skip-checks to export anyway."
      }
      InfraError::Validation(ValidationError::IncompatibleVersion { .. }) => {
        "Regenerate the document from its description with this build."
      }
      InfraError::Other { help, .. } => return help.clone(),
      InfraError::Config(ConfigError::InvalidValue { .. }) | InfraError::Io(_) => return None,
    };
    Some(hint.to_string())
  }
}

impl fmt::Display for InfraError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InfraError::Config(e) => fmt::Display::fmt(e, f),
      InfraError::Description(e) => fmt::Display::fmt(e, f),
      InfraError::Validation(e) => fmt::Display::fmt(e, f),
      InfraError::Io(e) => write!(f, "I/O error: {}", e),
      InfraError::Other { message, context, .. } => {
        f.write_str(message)?;
        context.iter().try_for_each(|line| write!(f, "\n{}", line))
      }
    }
  }
}

impl std::error::Error for InfraError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    if let InfraError::Io(e) = self { Some(e) } else { None }
  }
}

impl From<io::Error> for InfraError {
  fn from(err: io::Error) -> Self {
    InfraError::Io(err)
  }
}

/// Foreign errors that only need their message, with a short prefix
macro_rules! from_message {
  ($($source:ty => $prefix:literal),* $(,)?) => {
    $(
      impl From<$source> for InfraError {
        fn from(err: $source) -> Self {
          InfraError::message(format!(concat!($prefix, ": {}"), err))
        }
      }
    )*
  };
}

from_message! {
  toml_edit::de::Error => "Invalid TOML",
  toml_edit::ser::Error => "Cannot encode TOML",
  serde_json::Error => "JSON error",
  semver::Error => "Invalid version",
  std::string::FromUtf8Error => "Invalid UTF-8",
}

impl From<anyhow::Error> for InfraError {
  fn from(err: anyhow::Error) -> Self {
    InfraError::message(format!("{:#}", err))
  }
}

impl From<String> for InfraError {
  fn from(message: String) -> Self {
    InfraError::message(message)
  }
}

impl From<&str> for InfraError {
  fn from(message: &str) -> Self {
    InfraError::message(message)
  }
}

#[derive(Debug)]
pub enum ConfigError {
  /// No railjson.toml under the given root
  NotFound { root: PathBuf },
  /// `init` without --force over an existing file
  AlreadyExists { path: PathBuf },
  InvalidValue { field: String, reason: String },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { root } => write!(
        f,
        "No railjson configuration found.\nExpected file: {}",
        root.join("railjson.toml").display()
      ),
      ConfigError::AlreadyExists { path } => write!(f, "Configuration already exists: {}", path.display()),
      ConfigError::InvalidValue { field, reason } => write!(f, "Invalid value for '{}': {}", field, reason),
    }
  }
}

/// Failures reading an infrastructure description
#[derive(Debug)]
pub enum DescriptionError {
  UnsupportedFormat { path: PathBuf },
  Malformed { path: PathBuf, reason: String },
}

impl fmt::Display for DescriptionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DescriptionError::UnsupportedFormat { path } => write!(f, "Unsupported description format: {}", path.display()),
      DescriptionError::Malformed { path, reason } => write!(f, "Malformed description {}:\n{}", path.display(), reason),
    }
  }
}

#[derive(Debug)]
pub enum ValidationError {
  /// Names of the blocking checks
  ChecksFailed { failed: Vec<String> },
  /// A RailJson document carries a version this build cannot read
  IncompatibleVersion { found: String, expected: String },
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::ChecksFailed { failed } => write!(f, "{} check(s) failed: {}", failed.len(), failed.join(", ")),
      ValidationError::IncompatibleVersion { found, expected } => {
        write!(f, "RailJson version {} is incompatible with {}", found, expected)
      }
    }
  }
}

pub type InfraResult<T> = Result<T, InfraError>;

/// `.context(..)` for any result whose error converts into [`InfraError`]
pub trait ResultExt<T> {
  fn context(self, line: impl Into<String>) -> InfraResult<T>;

  /// Like `context`, but only builds the line on failure
  fn with_context<F>(self, line: F) -> InfraResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E: Into<InfraError>> ResultExt<T> for Result<T, E> {
  fn context(self, line: impl Into<String>) -> InfraResult<T> {
    self.map_err(|err| err.into().context(line))
  }

  fn with_context<F>(self, line: F) -> InfraResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|err| err.into().context(line()))
  }
}

/// Write `error` and its hint to stderr
pub fn print_error(error: &InfraError) {
  eprintln!("\n❌ {}\n", error);
  if let Some(help) = error.help() {
    eprintln!("💡 Help: {}\n", help);
  }
}
