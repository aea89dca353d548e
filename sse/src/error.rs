//! Error types for the `sse` crate.
//!
//! Follows the same pattern as the other layers: a root Error struct holding
//! an error kind and an optional source for error chaining.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Kinds of errors that can end an event stream or prevent it from starting.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The stream was configured with values it cannot run with.
    Config(String),
    /// A source failed to build the payload for its next tick.
    Payload,
    /// An envelope could not be serialized into an SSE event.
    Encoding,
}

impl Error {
    pub fn config(reason: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Config(reason.into()),
        }
    }

    pub fn payload<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Error {
            source: Some(err.into()),
            error_kind: ErrorKind::Payload,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.error_kind, &self.source) {
            (ErrorKind::Config(reason), _) => write!(f, "Invalid stream config: {reason}"),
            (kind, Some(source)) => write!(f, "SSE {kind:?} error: {source}"),
            (kind, None) => write!(f, "SSE {kind:?} error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Encoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_error_keeps_its_source() {
        let err = Error::payload("clock went backwards");
        assert_eq!(err.error_kind, ErrorKind::Payload);
        assert_eq!(err.source().unwrap().to_string(), "clock went backwards");
        assert_eq!(err.to_string(), "SSE Payload error: clock went backwards");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("tick interval must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid stream config: tick interval must be greater than zero"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_serde_json_error_maps_to_encoding() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.error_kind, ErrorKind::Encoding);
    }
}
