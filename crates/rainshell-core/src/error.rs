#![forbid(unsafe_code)]

//! Error type shared by the Rainshell core.

/// Rainshell core error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RainshellError {
    /// A configuration value is outside its accepted range.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// Host-provided options could not be parsed.
    ConfigParse(String),
    /// A timestamp could not be rendered.
    Format(String),
}

impl RainshellError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl core::fmt::Display for RainshellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
        }
    }
}

impl std::error::Error for RainshellError {}

impl From<serde_json::Error> for RainshellError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

impl From<time::error::Format> for RainshellError {
    fn from(err: time::error::Format) -> Self {
        Self::Format(err.to_string())
    }
}

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, RainshellError>;
