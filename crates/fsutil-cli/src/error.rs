//! Error types for fsutil-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from fsutil
    #[error(transparent)]
    Fs(#[from] fsutil::Error),

    /// Error writing command output
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging setup error
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_displays_message() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn fs_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: CliError = fsutil::Error::io("/tmp/x.txt", io).into();
        assert_eq!(error.to_string(), "I/O error at /tmp/x.txt: gone");
    }

    #[test]
    fn output_error_names_the_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let error: CliError = io.into();
        assert_eq!(error.to_string(), "Failed to write output: disk full");
    }
}
