// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Decode error for {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IngestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The filesystem path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Decode { path, .. } | Self::Io { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = IngestError::decode("kb/products/a.md", "invalid utf-8 sequence");
        assert_eq!(
            err.to_string(),
            "Decode error for kb/products/a.md: invalid utf-8 sequence"
        );

        let err = IngestError::io(
            "kb/employees/b.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("IO error for kb/employees/b.md"));
        assert_eq!(err.path(), Some(std::path::Path::new("kb/employees/b.md")));
    }

    #[test]
    fn test_configuration_error_has_no_path() {
        let err = IngestError::Configuration("root missing".to_string());
        assert!(err.path().is_none());
    }
}
