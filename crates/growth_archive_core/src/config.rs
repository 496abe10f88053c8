//! Viewer configuration.
//!
//! # Responsibility
//! - Hold the few knobs the viewer exposes (fallback ids, hidden groups).
//! - Load overrides from a JSON file; every field is optional.
//!
//! # Invariants
//! - Fallback ids are never blank after validation.
//! - `comment_max_chars` is never zero after validation.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Section shown when a section id does not resolve.
pub const DEFAULT_SECTION_ID: &str = "growth-records";
/// Record shown when a record id does not resolve.
pub const DEFAULT_RECORD_ID: &str = "lang-1";
/// Unit name hidden from the structure view in the subject schema.
pub const DEFAULT_HIDDEN_GROUP: &str = "其他";
const DEFAULT_COMMENT_MAX_CHARS: usize = 500;
const DEFAULT_SEMESTER_LABEL: &str = "2024-2025 上";

/// Runtime configuration for catalog lookup and screen composition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub default_section_id: String,
    pub default_record_id: String,
    /// Category names omitted from the structure view.
    pub hidden_group_names: Vec<String>,
    pub comment_max_chars: usize,
    pub semester_label: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_section_id: DEFAULT_SECTION_ID.to_string(),
            default_record_id: DEFAULT_RECORD_ID.to_string(),
            hidden_group_names: vec![DEFAULT_HIDDEN_GROUP.to_string()],
            comment_max_chars: DEFAULT_COMMENT_MAX_CHARS,
            semester_label: DEFAULT_SEMESTER_LABEL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Validates field-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_section_id.trim().is_empty() {
            return Err(ConfigError::Invalid("default_section_id must not be blank"));
        }
        if self.default_record_id.trim().is_empty() {
            return Err(ConfigError::Invalid("default_record_id must not be blank"));
        }
        if self.comment_max_chars == 0 {
            return Err(ConfigError::Invalid("comment_max_chars must be positive"));
        }
        Ok(())
    }

    /// Returns whether a category with `name` is hidden from structure view.
    pub fn is_hidden_group(&self, name: &str) -> bool {
        self.hidden_group_names.iter().any(|hidden| hidden == name)
    }
}

/// Errors from configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not valid config JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Parsed config violates an invariant.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Loads and validates configuration from a JSON file.
///
/// # Errors
/// - Returns `ConfigError::Io` when the file cannot be read.
/// - Returns `ConfigError::Parse` for malformed JSON or unknown value types.
/// - Returns `ConfigError::Invalid` when validation fails.
pub fn load_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ViewerConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    log::debug!(
        "event=config_loaded module=config status=ok path={} hidden_groups={}",
        path.display(),
        config.hidden_group_names.len()
    );
    Ok(config)
}
