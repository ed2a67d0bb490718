//! Client configuration: host, API key, and the transport to dispatch with.
//!
//! # Design
//! A `Config` is immutable after construction — changing any of it means
//! building a new client. Validation happens here, once, so every later
//! operation can assume a well-formed base URL. Header mechanics also live
//! here: the request client asks for headers, it never assembles them.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::transport::{Transport, UreqTransport};

/// Immutable connection settings shared by every client in one facade.
///
/// Cheap to clone: the transport is held behind an `Arc`.
#[derive(Clone)]
pub struct Config {
    host: String,
    api_key: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Config {
    /// Validate `host` and build a configuration using the default
    /// `UreqTransport`.
    pub fn new(host: &str, api_key: Option<&str>) -> Result<Self, Error> {
        Self::with_transport(host, api_key, Arc::new(UreqTransport::new()))
    }

    /// Validate `host` and build a configuration around a caller-supplied
    /// transport. This is the substitution point for test doubles.
    pub fn with_transport(
        host: &str,
        api_key: Option<&str>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, Error> {
        let host = host.trim_end_matches('/');
        let authority = host
            .strip_prefix("http://")
            .or_else(|| host.strip_prefix("https://"))
            .ok_or_else(|| Error::InvalidHost(host.to_string()))?;
        if authority.is_empty() {
            return Err(Error::InvalidHost(host.to_string()));
        }
        Ok(Self {
            host: host.to_string(),
            api_key: api_key.map(str::to_string),
            transport,
        })
    }

    /// Join the host and an API path verbatim. Any query string the caller
    /// appends later must already be percent-encoded; no escaping happens
    /// downstream of here.
    pub fn url(&self, api: &str) -> String {
        format!("{}{}", self.host, api)
    }

    /// Headers for one request: the API key header when a key is configured,
    /// plus `Content-Type` for bodied requests.
    pub(crate) fn headers(&self, json_body: bool) -> Vec<(String, String)> {
        let mut headers = Vec::new();
        if let Some(key) = &self.api_key {
            headers.push(("X-Meili-API-Key".to_string(), key.clone()));
        }
        if json_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

// Manual impl: the API key must not leak through debug output, and the
// transport has no useful representation.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
