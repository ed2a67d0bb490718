//! Resource client for the stats endpoints.

use std::sync::Arc;

use crate::error::Error;
use crate::request::{decode_response, RequestClient};
use crate::types::{AllStats, Stat};

#[derive(Debug)]
pub struct Stats {
    request: Arc<RequestClient>,
}

impl Stats {
    pub(crate) fn new(request: Arc<RequestClient>) -> Self {
        Self { request }
    }

    /// Aggregate statistics across every index.
    pub fn all_stats(&self) -> Result<AllStats, Error> {
        let body = self.request.get("/stats", None)?;
        decode_response(body)
    }

    /// Statistics for one index.
    pub fn stats(&self, uid: &str) -> Result<Stat, Error> {
        let body = self.request.get(&format!("/indexes/{uid}/stats"), None)?;
        decode_response(body)
    }
}
