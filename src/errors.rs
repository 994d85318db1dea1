//! Crate-level error types.
//!
//! Module-specific failures (`CodecError`, `ContactError`, `SubmissionError`,
//! `FlowError`, `AnswerError`) live next to the code that raises them. The
//! session store reports through [`ReadinessError`] and the binary wraps
//! everything in `anyhow` at the edge.
//!
//! Nothing here is fatal to an assessment session: undecodable links fall back
//! to an empty answer set, rejected contacts are re-prompted, and submission
//! failures are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse .readiness.toml: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session store is corrupt: {0}")]
    SessionStore(String),
}

impl ReadinessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadinessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_errors_name_the_path() {
        let err = ReadinessError::io(
            "/tmp/session.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/session.json: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn corrupt_store_keeps_detail() {
        let err = ReadinessError::SessionStore("session.json: expected value".to_string());
        assert_eq!(err.to_string(), "session store is corrupt: session.json: expected value");
        assert!(err.source().is_none());
    }
}
