//! Error types and exit codes for mailmark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error
//! - 3: Malformed input data

mod macros;

use thiserror::Error;

/// Exit codes for the mailmark CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Malformed input data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while configuring or running a pipeline
#[derive(Error, Debug)]
pub enum MailmarkError {
    // Configuration errors (exit code 2)
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("unknown transformer: {name} (registered: {registered})")]
    UnknownTransformer { name: String, registered: String },

    #[error("invalid configuration for transformer {transformer}: {reason}")]
    InvalidConfig { transformer: String, reason: String },

    // Input data errors (exit code 3)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Stage failures (exit code 1)
    #[error("transformer {transformer} failed: {reason}")]
    TransformFailed { transformer: String, reason: String },

    #[error("transformer {transformer} panicked: {message}")]
    TransformerPanicked {
        transformer: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MailmarkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MailmarkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        MailmarkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a transformer whose options could not be applied
    pub fn invalid_config(transformer: &str, reason: impl std::fmt::Display) -> Self {
        MailmarkError::InvalidConfig {
            transformer: transformer.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed transformer stage
    pub fn transform_failed(transformer: &str, reason: impl std::fmt::Display) -> Self {
        MailmarkError::TransformFailed {
            transformer: transformer.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error comes from configuration rather than from running a batch
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MailmarkError::InvalidValue { .. }
                | MailmarkError::Unsupported { .. }
                | MailmarkError::UnknownTransformer { .. }
                | MailmarkError::InvalidConfig { .. }
                | MailmarkError::Toml(_)
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MailmarkError::InvalidValue { .. }
            | MailmarkError::Unsupported { .. }
            | MailmarkError::UnknownTransformer { .. }
            | MailmarkError::InvalidConfig { .. }
            | MailmarkError::Toml(_) => ExitCode::Usage,

            MailmarkError::InvalidInput(_) | MailmarkError::Json(_) => ExitCode::Data,

            MailmarkError::TransformFailed { .. }
            | MailmarkError::TransformerPanicked { .. }
            | MailmarkError::Io(_)
            | MailmarkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MailmarkError::InvalidValue { .. } => "invalid_value",
            MailmarkError::Unsupported { .. } => "unsupported",
            MailmarkError::UnknownTransformer { .. } => "unknown_transformer",
            MailmarkError::InvalidConfig { .. } => "invalid_config",
            MailmarkError::InvalidInput(_) => "invalid_input",
            MailmarkError::TransformFailed { .. } => "transform_failed",
            MailmarkError::TransformerPanicked { .. } => "transformer_panicked",
            MailmarkError::Io(_) => "io_error",
            MailmarkError::Json(_) => "json_error",
            MailmarkError::Toml(_) => "toml_error",
            MailmarkError::Other(_) => "other",
        }
    }

    /// Name of the transformer this error is attributed to, if any
    pub fn transformer(&self) -> Option<&str> {
        match self {
            MailmarkError::InvalidConfig { transformer, .. }
            | MailmarkError::TransformFailed { transformer, .. }
            | MailmarkError::TransformerPanicked { transformer, .. } => Some(transformer),
            MailmarkError::UnknownTransformer { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(transformer) = self.transformer() {
            error_obj["transformer"] = serde_json::json!(transformer);
        }
        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for mailmark operations
pub type Result<T> = std::result::Result<T, MailmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_usage() {
        let err = MailmarkError::UnknownTransformer {
            name: "nope".to_string(),
            registered: "content_cleaner".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(err.transformer(), Some("nope"));
    }

    #[test]
    fn test_stage_failure_is_not_config_error() {
        let err = MailmarkError::transform_failed("link_extractor", "boom");
        assert!(!err.is_config_error());
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.to_string(), "transformer link_extractor failed: boom");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = MailmarkError::invalid_config("thread_processor", "unknown mode");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_config");
        assert_eq!(json["error"]["transformer"], "thread_processor");
    }

    #[test]
    fn test_input_errors_map_to_data() {
        let err = MailmarkError::InvalidInput("expected a JSON array".to_string());
        assert_eq!(err.exit_code(), ExitCode::Data);
    }
}
