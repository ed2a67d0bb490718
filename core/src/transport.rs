//! The transport seam: the one boundary that performs network I/O.
//!
//! # Design
//! Everything above this trait is deterministic request building and JSON
//! decoding. `Transport::execute` produces exactly one outcome per call by
//! construction (`Result` cannot carry both a response and an error), which
//! is the delivery invariant the rest of the SDK relies on.
//!
//! `UreqTransport` is the real implementation. Tests substitute
//! `mock::MockTransport`, which replays canned outcomes and records every
//! request it was asked to execute.

use tracing::trace;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Type-erased transport error, surfaced verbatim to callers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Executes one HTTP request and returns one outcome.
///
/// Implementations are responsible for their own thread safety; the layers
/// above hold no mutable state and share the transport freely.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Real transport backed by a `ureq::Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data rather than `Err` — status interpretation is
/// not this SDK's job. An empty response body maps to `body: None`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        trace!(?method, %url, "executing request");

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), &headers).send(&body[..])
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&url), &headers).send(&body[..])
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&url), &headers).send_empty(),
        };
        let mut response = result.map_err(|e| Box::new(e) as BoxError)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Box::new(e) as BoxError)?;
        let body = if bytes.is_empty() { None } else { Some(bytes) };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

#[cfg(test)]
pub(crate) mod mock {
    //! Canned-outcome transport for deterministic, network-free tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{BoxError, Transport};
    use crate::http::{HttpRequest, HttpResponse};

    /// Replays queued outcomes in order and records every executed request,
    /// so tests can assert both what was sent and that exactly one dispatch
    /// happened per call.
    pub(crate) struct MockTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, BoxError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn reply(&self, response: Result<HttpResponse, BoxError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Queue a 200 response with the given JSON body.
        pub fn reply_json(&self, json: &str) {
            self.reply(Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: Some(json.as_bytes().to_vec()),
            }));
        }

        /// Queue a 200 response with no body at all.
        pub fn reply_empty(&self) {
            self.reply(Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: None,
            }));
        }

        /// Queue a transport-level failure, like a refused connection.
        pub fn reply_error(&self, message: &str) {
            self.reply(Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.to_string(),
            ))));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
            let url = request.url.clone();
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("no canned response queued for {url}"))
        }
    }
}
