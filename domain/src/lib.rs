//! Echo stream domain logic.
//!
//! Builds the event streams served by the web layer from request input and
//! the configured stream timing. The `sse` crate provides the generic
//! plumbing (ticking sources, merging, encoding); this crate decides which
//! sources exist and what their payloads contain.

pub use events::{EchoPayload, Envelope, EventKind, UnixEchoPayload};
pub use service::config::StreamSettings;
pub use sse::EnvelopeStream;

pub mod echo;
pub mod error;
