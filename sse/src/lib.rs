//! Server-Sent Events (SSE) stream plumbing for the echo endpoints.
//!
//! This crate turns independently ticking event sources into a single,
//! correctly tagged SSE event stream.
//!
//! # Architecture
//!
//! - **Lazy sources**: a `TickingSource` is a plain `Stream`. Nothing runs
//!   until the HTTP body polls it, and nothing keeps running once the body is
//!   dropped, so a client disconnect tears down every timer of its request.
//! - **Per-source ids**: each source owns one counter starting at 0. Merging
//!   never renumbers envelopes.
//! - **Arrival-order merge**: `merge` yields whichever source is ready first
//!   and fails fast on the first source error.
//! - **Explicit encoding**: `encoder` maps an envelope to an
//!   `axum::response::sse::Event` (`event`, `id`, JSON `data`).
//!
//! # Message Flow
//!
//! 1. A controller builds one or more `TickingSource`s from request params
//! 2. `into_stream` turns each into an `EnvelopeStream`
//! 3. `merge` combines them (when there is more than one)
//! 4. `encoder::encode_stream` maps envelopes to SSE events
//! 5. `axum::response::sse::Sse` writes them to the open connection
//!
//! # Modules
//!
//! - `source`: `TickingSource` and the `EnvelopeStream` alias
//! - `merge`: arrival-order, fail-fast merging of envelope streams
//! - `encoder`: envelope to SSE event adapter
//! - `error`: error type shared by all of the above

pub mod encoder;
pub mod error;
pub mod merge;
pub mod source;

pub use error::Error;
pub use merge::merge;
pub use source::{EnvelopeStream, TickingSource};
