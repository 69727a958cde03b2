use std::path::PathBuf;

use thiserror::Error;

/// Workspace-wide error type for the jsonveil tool.
///
/// This error type encompasses all possible errors that can occur during a
/// run, providing structured error handling and meaningful error messages
/// for the different failure scenarios. The transform itself is total over
/// any well-formed JSON tree; every variant here belongs to the I/O or
/// configuration boundary.
#[derive(Error, Debug)]
pub enum JsonveilError {
    /// Input file missing or unreadable
    #[error("Failed to read input file '{}': {source}", .path.display())]
    Input {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// Input file is not valid JSON
    #[error("Input file '{}' is not valid JSON: {source}", .path.display())]
    Parse {
        path:   PathBuf,
        source: serde_json::Error,
    },

    /// Destination path unwritable (permissions, missing directory)
    #[error("Failed to write output file '{}': {source}", .path.display())]
    Output {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("JSON serialization error: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

/// Result type alias for jsonveil operations.
pub type Result<T> = std::result::Result<T, JsonveilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = JsonveilError::Input {
            path:   PathBuf::from("/missing/input.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/missing/input.json"));

        let err = JsonveilError::Output {
            path:   PathBuf::from("/readonly/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/readonly/out.json"));
    }

    #[test]
    fn test_config_error_message() {
        let err = JsonveilError::Config {
            message: "at least one exclude key is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: at least one exclude key is required"
        );
    }
}
