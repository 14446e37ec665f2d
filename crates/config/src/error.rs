use std::fmt;

use crate::SettingKey;

/// A configuration problem that must stop the generator before it writes anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting `{key}`")]
    MissingKey { key: SettingKey },
    #[error("unrecognized setting `{key}`")]
    UnknownKey { key: String },
    #[error("unrecognized override `{key}`")]
    UnknownOverrideKey { key: String },
    #[error("invalid value for `{key}`: {reason}")]
    MalformedValue { key: SettingKey, reason: String },
}

impl ConfigError {
    pub(crate) fn malformed(key: SettingKey, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            key,
            reason: reason.into(),
        }
    }

    /// Name of the setting the error is about.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingKey { key } | ConfigError::MalformedValue { key, .. } => {
                key.as_str()
            }
            ConfigError::UnknownKey { key } | ConfigError::UnknownOverrideKey { key } => {
                key.as_str()
            }
        }
    }
}

/// An inconsistency the external generator tolerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub message: String,
}

impl ConfigWarning {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.key, self.message)
    }
}

/// Outcome of a single structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    Error(ConfigError),
    Warning(ConfigWarning),
}

impl ValidationIssue {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ValidationIssue::Error(_))
    }

    pub fn key(&self) -> &str {
        match self {
            ValidationIssue::Error(error) => error.key(),
            ValidationIssue::Warning(warning) => warning.key.as_str(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Error(error) => write!(f, "error: {error}"),
            ValidationIssue::Warning(warning) => write!(f, "warning: {warning}"),
        }
    }
}

impl From<ConfigError> for ValidationIssue {
    fn from(error: ConfigError) -> Self {
        Self::Error(error)
    }
}

impl From<ConfigWarning> for ValidationIssue {
    fn from(warning: ConfigWarning) -> Self {
        Self::Warning(warning)
    }
}

/// Split `issues` into the first fatal error, if any, or the warnings.
pub fn into_warnings(
    issues: impl IntoIterator<Item = ValidationIssue>,
) -> Result<Vec<ConfigWarning>, ConfigError> {
    let mut warnings = Vec::new();
    for issue in issues {
        match issue {
            ValidationIssue::Error(error) => return Err(error),
            ValidationIssue::Warning(warning) => warnings.push(warning),
        }
    }
    Ok(warnings)
}
