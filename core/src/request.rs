//! The request client: builds one request per call and normalizes outcomes.
//!
//! # Design
//! `RequestClient` is stateless after construction — it holds only the
//! `Config` (host, key, transport). Each operation builds an absolute URL,
//! attaches headers and body, dispatches once through the transport seam,
//! and returns `Ok(body)` where `body` keeps the absent-vs-present
//! distinction. A transport failure short-circuits to `Error::Transport`
//! with no decoding attempted.
//!
//! Every call yields exactly one outcome, including POST/PUT answered with
//! an empty body: those return `Ok(None)`, and resource clients turn `None`
//! into `Error::DataNotFound` wherever a payload was required. There are no
//! retries, no timeout overrides, and no status-code interpretation.

use std::sync::mpsc;
use std::thread;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::config::Config;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Stateless dispatcher shared by all resource clients of one facade.
#[derive(Debug)]
pub struct RequestClient {
    config: Config,
}

impl RequestClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// GET `api`, with an optional pre-encoded query string appended
    /// verbatim. An absent response body is a valid outcome (`Ok(None)`).
    pub fn get(&self, api: &str, param: Option<&str>) -> Result<Option<Vec<u8>>, Error> {
        let mut url = self.config.url(api);
        if let Some(param) = param {
            if !param.is_empty() {
                url.push_str(param);
            }
        }
        self.dispatch(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.config.headers(false),
            body: None,
        })
    }

    /// POST `body` to `api`.
    pub fn post(&self, api: &str, body: Vec<u8>) -> Result<Option<Vec<u8>>, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.url(api),
            headers: self.config.headers(true),
            body: Some(body),
        })
    }

    /// PUT `body` to `api`.
    pub fn put(&self, api: &str, body: Vec<u8>) -> Result<Option<Vec<u8>>, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Put,
            url: self.config.url(api),
            headers: self.config.headers(true),
            body: Some(body),
        })
    }

    /// DELETE `api`. An absent response body is the normal outcome.
    pub fn delete(&self, api: &str) -> Result<Option<Vec<u8>>, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Delete,
            url: self.config.url(api),
            headers: self.config.headers(false),
            body: None,
        })
    }

    fn dispatch(&self, request: HttpRequest) -> Result<Option<Vec<u8>>, Error> {
        trace!(method = ?request.method, url = %request.url, "dispatching");
        let HttpResponse { status, body, .. } = self
            .config
            .transport()
            .execute(request)
            .map_err(Error::Transport)?;
        trace!(status, has_body = body.is_some(), "response received");
        Ok(body)
    }
}

/// Presence check followed by strict decoding: the three-step contract every
/// resource client applies to a request outcome.
pub(crate) fn decode_response<T: DeserializeOwned>(body: Option<Vec<u8>>) -> Result<T, Error> {
    let bytes = body.ok_or(Error::DataNotFound)?;
    serde_json::from_slice(&bytes).map_err(Error::Decoding)
}

/// Synchronous reachability probe: GET `url` on a fresh default transport
/// and block until the outcome arrives.
///
/// `true` iff the transport reported no error; the response itself is
/// discarded. The one-shot channel is the completion signal — if the probe
/// thread dies the receiver sees a disconnect and the probe degrades to
/// `false` instead of hanging.
pub fn ping(url: &str) -> bool {
    let (tx, rx) = mpsc::channel();
    let url = url.to_string();
    thread::spawn(move || {
        let outcome = UreqTransport::new().execute(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        });
        let _ = tx.send(outcome.is_ok());
    });
    rx.recv().unwrap_or(false)
}
