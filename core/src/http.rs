//! HTTP requests and responses as plain data.
//!
//! # Design
//! These types describe one HTTP exchange with no behavior attached. The
//! request client builds `HttpRequest` values and hands them to the transport
//! seam; the transport answers with an `HttpResponse`. Keeping both as owned
//! plain data means a test double can fabricate either side without touching
//! the network.
//!
//! `HttpResponse::body` is an `Option` because "the server sent no bytes" is
//! a distinct, valid outcome in this SDK's contract, not an empty string.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: the request client joins the configured host, the API
/// path, and any pre-encoded query string before the transport sees it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
///
/// `status` and `headers` are carried for transports and tests; the request
/// client itself never interprets them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}
