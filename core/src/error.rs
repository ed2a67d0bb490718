//! Error types for the Meilisearch client.
//!
//! # Design
//! Three runtime kinds mirror the three ways a call can go wrong: the
//! transport failed, the server answered with no body where one was needed,
//! or the body did not parse into the expected shape. `InvalidHost` is the
//! single construction-time failure; `Encoding` covers request payloads that
//! cannot be serialized. Transport errors are kept type-erased so whatever
//! the transport reported reaches the caller verbatim.

use crate::transport::BoxError;

/// Errors surfaced through every client operation's `Result`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured host is not a usable `http://` or `https://` URL.
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// The transport seam reported a failure; no decoding was attempted.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response carried no body where one was required for decoding.
    #[error("response carried no data")]
    DataNotFound,

    /// The response body did not parse into the expected JSON shape.
    #[error("decoding response failed: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("encoding request failed: {0}")]
    Encoding(#[source] serde_json::Error),
}
