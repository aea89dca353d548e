//! Error types for the `domain` layer.
use sse::error::{Error as SseError, ErrorKind as SseErrorKind};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors are modeled as a root `Error` holding an `error_kind` tree and the
/// original error as `source`. Errors from the `sse` crate are translated
/// here so that `web` only ever matches on domain error kinds when choosing
/// an HTTP status.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// The configured stream timing cannot be used to build a stream.
    Config,
    /// A stream failed while producing or encoding events.
    Stream(StreamErrorKind),
    Other(String),
}

#[derive(Debug, PartialEq)]
pub enum StreamErrorKind {
    Payload,
    Encoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `sse` layer to the `domain` layer.
impl From<SseError> for Error {
    fn from(err: SseError) -> Self {
        let internal_error_kind = match err.error_kind {
            SseErrorKind::Config(_) => InternalErrorKind::Config,
            SseErrorKind::Payload => InternalErrorKind::Stream(StreamErrorKind::Payload),
            SseErrorKind::Encoding => InternalErrorKind::Stream(StreamErrorKind::Encoding),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(internal_error_kind),
        }
    }
}
