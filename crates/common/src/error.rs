//! Error types shared across Handsign crates.

use std::path::PathBuf;

/// Top-level error type for Handsign operations.
///
/// Classification itself never fails; these errors come from the layers
/// around it (file input, configuration, speech output).
#[derive(Debug, thiserror::Error)]
pub enum HandsignError {
    #[error("Invalid landmark set: expected {expected} points, got {actual}")]
    InvalidLandmarks { expected: usize, actual: usize },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Speech error: {message}")]
    Speech { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using HandsignError.
pub type HandsignResult<T> = Result<T, HandsignError>;

impl HandsignError {
    pub fn invalid_landmarks(expected: usize, actual: usize) -> Self {
        Self::InvalidLandmarks { expected, actual }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_landmarks_message() {
        let err = HandsignError::invalid_landmarks(21, 20);
        assert_eq!(
            err.to_string(),
            "Invalid landmark set: expected 21 points, got 20"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HandsignError = io.into();
        assert!(matches!(err, HandsignError::Io(_)));
    }
}
