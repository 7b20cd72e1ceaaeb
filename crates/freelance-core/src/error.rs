//! Error taxonomy for the dashboard
//!
//! None of these are fatal: validation errors go back to the form, storage
//! errors fall back to defaults, lookup errors are shown to the user.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed form input
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Corrupt or inaccessible persisted state
    #[error("storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// Unknown bucket, status or other closed-set key
    #[error("unknown {kind} '{key}'")]
    Lookup { kind: &'static str, key: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn lookup(kind: &'static str, key: impl Into<String>) -> Self {
        Error::Lookup { kind, key: key.into() }
    }

    /// Short heading used for notifications
    pub fn title(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "Invalid input",
            Error::Storage { .. } | Error::Json(_) => "Storage problem",
            Error::Lookup { .. } => "Not found",
            Error::Csv(_) => "Export failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::validation("email", "missing '@'");
        assert_eq!(err.to_string(), "invalid email: missing '@'");

        let err = Error::lookup("time range", "weekly");
        assert_eq!(err.to_string(), "unknown time range 'weekly'");

        let err = Error::storage("userSettings", "quota exceeded");
        assert_eq!(err.to_string(), "storage error for 'userSettings': quota exceeded");
    }

    #[test]
    fn test_error_titles() {
        assert_eq!(Error::validation("name", "empty").title(), "Invalid input");
        assert_eq!(Error::lookup("status", "x").title(), "Not found");
        assert_eq!(Error::storage("k", "m").title(), "Storage problem");
    }
}
