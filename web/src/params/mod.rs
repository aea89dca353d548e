//! This module holds typed parameters for the endpoint inputs.
//!
//! Query strings are deserialized straight into these structs by axum's
//! `Query` extractor, so a missing or malformed parameter is rejected with
//! `400 Bad Request` before a handler runs and before any stream starts.

pub(crate) mod echo;
