/// Error types for the portfolio crate
///
/// Loading the project data file is the only fallible path on the page.
/// Every failure here collapses into one of two kinds, transport or parse,
/// and the content store swallows both.

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Network-level failure talking to the content host
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Content host answered with a non-success status
    #[error("Content host returned HTTP {0}")]
    HttpStatus(u16),

    /// I/O errors (reading the data file from a local site root)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Body was not JSON, or not shaped like a list of projects
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Body parsed but a record broke an invariant
    #[error("Invalid project record: {0}")]
    InvalidRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Which side of the load a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Unreachable host, missing file, non-success status
    Transport,
    /// Malformed body or a record that fails validation
    Parse,
    /// Anything that is not part of fetching the data file
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::Transport => "transport",
            FailureKind::Parse => "parse",
            FailureKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl PortfolioError {
    /// Classify this error for the load outcome
    pub fn kind(&self) -> FailureKind {
        match self {
            PortfolioError::Http(_) | PortfolioError::HttpStatus(_) | PortfolioError::Io(_) => {
                FailureKind::Transport
            }
            PortfolioError::Serialization(_) | PortfolioError::InvalidRecord(_) => {
                FailureKind::Parse
            }
            PortfolioError::Config(_) => FailureKind::Other,
        }
    }

    /// Convert to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PortfolioError::Http(e) => {
                format!("Could not reach the content host. Details: {}", e)
            }
            PortfolioError::HttpStatus(status) => {
                format!("Content host answered with status {}", status)
            }
            PortfolioError::Io(e) => {
                format!("Could not read the data file. Check the path. Details: {}", e)
            }
            PortfolioError::Serialization(e) => {
                format!("Data file is not a valid project list: {}", e)
            }
            PortfolioError::InvalidRecord(reason) => {
                format!("Data file has a bad project: {}", reason)
            }
            PortfolioError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = PortfolioError::HttpStatus(404);
        assert!(err.user_message().contains("404"));

        let err = PortfolioError::InvalidRecord("empty title".to_string());
        assert!(err.user_message().contains("empty title"));
    }

    #[test]
    fn test_error_display() {
        let err = PortfolioError::Config("bad base url".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
    }

    #[test]
    fn test_failure_kinds() {
        assert_eq!(PortfolioError::HttpStatus(500).kind(), FailureKind::Transport);

        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "projects.json");
        assert_eq!(PortfolioError::Io(missing).kind(), FailureKind::Transport);

        let bad_json = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(PortfolioError::Serialization(bad_json).kind(), FailureKind::Parse);

        assert_eq!(
            PortfolioError::InvalidRecord("x".to_string()).kind(),
            FailureKind::Parse
        );
        assert_eq!(PortfolioError::Config("x".to_string()).kind(), FailureKind::Other);
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Transport.to_string(), "transport");
        assert_eq!(FailureKind::Parse.to_string(), "parse");
    }
}
