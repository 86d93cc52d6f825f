//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON (de)serialization failure without a file attached.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A user-supplied pattern failed to compile.
    #[display("Invalid pattern: {_0}")]
    Regex(regex::Error),

    /// A file on disk is not valid JSON, or does not have the expected shape.
    #[from(ignore)]
    #[display("Invalid JSON in {}: {message}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The navigation document is missing a structure the merge relies on.
    #[from(ignore)]
    #[display("Invalid navigation structure: {_0}")]
    Structure(String),

    /// Bad configuration or CLI input (unknown locale, no matching files, ...).
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Builds a `Parse` error for `path`.
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        AppError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Strings must not land in Structure or Config
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = AppError::parse("specs/openapi.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Invalid JSON in specs/openapi.json: expected value at line 1"
        );
    }

    #[test]
    fn test_structure_manual_creation() {
        let err = AppError::Structure("missing navigation.languages".into());
        assert_eq!(
            format!("{}", err),
            "Invalid navigation structure: missing navigation.languages"
        );
    }
}
