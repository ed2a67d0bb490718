//! Client SDK for the Meilisearch HTTP API.
//!
//! # Overview
//! Maps method calls onto REST calls: build a request, send it through a
//! pluggable transport, strictly decode the JSON response into a typed
//! value. All search and indexing logic lives on the server; this crate is
//! the thin, testable layer in front of it.
//!
//! # Design
//! - `Transport` is the only seam that performs I/O; tests substitute a
//!   canned-outcome double and everything above stays deterministic.
//! - `RequestClient` normalizes every call to `Result<Option<Vec<u8>>>`,
//!   keeping "no body" distinct from "empty body" — exactly one outcome per
//!   call, including writes answered without a payload.
//! - Resource clients apply one contract everywhere: forward failures,
//!   map a required-but-absent body to `DataNotFound`, strictly decode the
//!   rest.
//! - `MeiliClient` wires one immutable `Config` into one resource client per
//!   capability; nothing holds mutable state after construction.

pub mod client;
pub mod config;
pub mod dumps;
pub mod error;
pub mod http;
pub mod indexes;
pub mod keys;
pub mod request;
pub mod stats;
pub mod system;
pub mod transport;
pub mod types;

pub use client::MeiliClient;
pub use config::Config;
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use indexes::Index;
pub use request::{ping, RequestClient};
pub use transport::{BoxError, Transport, UreqTransport};
pub use types::{
    AllStats, CreateIndex, Dump, DumpStatus, Health, IndexInfo, Key, Stat, UpdateIndex, Version,
};
