//! SSE response plumbing for the web layer.
//!
//! Controllers build envelope streams through `domain`; this module turns
//! them into an `axum::response::sse::Sse` response. The stream machinery
//! itself (sources, merging, encoding) lives in the `sse` crate.

pub(crate) mod handler;
