//! Error types for burndown.
//!
//! All fallible operations return `Result<T, BurndownError>` instead of
//! panicking. Arithmetic inside the simulator never fails: durations,
//! variability and remaining work are clamped rather than rejected.

use thiserror::Error;

/// Result type alias for burndown operations.
pub type BurndownResult<T> = Result<T, BurndownError>;

/// Unified error type for all burndown operations.
#[derive(Debug, Error)]
pub enum BurndownError {
    // ===== Input Rejections =====
    /// Duration is not a finite number of at least two days.
    #[error("Duration must be at least 2 days. (got {value})")]
    InvalidDuration {
        /// The rejected value as supplied.
        value: String,
    },

    /// Total work is not a finite positive number.
    #[error("Total work must be greater than 0. (got {value})")]
    InvalidTotalWork {
        /// The rejected value as supplied.
        value: String,
    },

    /// Unknown burn model name.
    #[error("Unknown burn model '{name}': expected linear, realistic or custom")]
    UnknownModel {
        /// The rejected model name.
        name: String,
    },

    /// Unknown output format name.
    #[error("Unknown output format '{name}': expected table, csv, json or chart")]
    UnknownFormat {
        /// The rejected format name.
        name: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BurndownError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error rejects user input before any simulation runs.
    ///
    /// Input rejections are shown to the user verbatim and produce no output.
    #[must_use]
    pub const fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration { .. }
                | Self::InvalidTotalWork { .. }
                | Self::UnknownModel { .. }
                | Self::UnknownFormat { .. }
        )
    }
}

impl From<serde_json::Error> for BurndownError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_rejection_detection() {
        let duration = BurndownError::InvalidDuration {
            value: "1".to_string(),
        };
        assert!(duration.is_input_rejection());

        let total = BurndownError::InvalidTotalWork {
            value: "0".to_string(),
        };
        assert!(total.is_input_rejection());

        let model = BurndownError::UnknownModel {
            name: "exponential".to_string(),
        };
        assert!(model.is_input_rejection());

        let config = BurndownError::config("invalid");
        assert!(!config.is_input_rejection());
    }

    #[test]
    fn test_duration_message_matches_user_notice() {
        let err = BurndownError::InvalidDuration {
            value: "1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Duration must be at least 2 days."));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_total_work_message_matches_user_notice() {
        let err = BurndownError::InvalidTotalWork {
            value: "-3".to_string(),
        };
        assert!(err
            .to_string()
            .starts_with("Total work must be greater than 0."));
    }

    #[test]
    fn test_error_config() {
        let err = BurndownError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_serialization() {
        let err = BurndownError::serialization("failed to serialize");
        assert!(!err.is_input_rejection());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_io() {
        let err = BurndownError::io("file not found");
        assert!(!err.is_input_rejection());
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").err();
        assert!(json_err.is_some());
        if let Some(e) = json_err {
            let err: BurndownError = e.into();
            assert!(matches!(err, BurndownError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_debug() {
        let err = BurndownError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
