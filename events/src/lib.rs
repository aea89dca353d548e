//! Event model for the echo streams.
//!
//! This crate holds the data that flows through an SSE stream, with no
//! knowledge of timers, merging or HTTP.
//!
//! # Architecture
//!
//! - **EventKind**: closed set of event kinds. Each kind has a declared
//!   (CapitalizedWords) name and a derived snake_case event name used as the
//!   SSE `event:` field.
//! - **Envelope**: a payload tagged with its kind and, once a source has
//!   stamped it, a per-source sequence id.
//! - **Payloads**: plain serializable records, built fresh on every tick.
//!
//! This crate has no dependencies on internal crates, so every other layer
//! can depend on it.

pub mod envelope;
pub mod kind;
pub mod naming;
pub mod payload;

pub use envelope::Envelope;
pub use kind::EventKind;
pub use payload::{EchoPayload, UnixEchoPayload};
