//! Resource clients for the `/indexes` endpoints.
//!
//! `Indexes` covers the collection-scoped operations; `Index` is the
//! per-index handle keyed by a caller-supplied uid. Both share the facade's
//! request client.

use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::request::{decode_response, RequestClient};
use crate::types::{CreateIndex, IndexInfo, Stat, UpdateIndex};

#[derive(Debug)]
pub struct Indexes {
    request: Arc<RequestClient>,
}

impl Indexes {
    pub(crate) fn new(request: Arc<RequestClient>) -> Self {
        Self { request }
    }

    /// Handle for one index. No request is made; the uid is not checked for
    /// existence until an operation runs.
    pub fn index(&self, uid: &str) -> Index {
        Index::new(Arc::clone(&self.request), uid)
    }

    /// List every index on the server.
    pub fn list(&self) -> Result<Vec<IndexInfo>, Error> {
        let body = self.request.get("/indexes", None)?;
        decode_response(body)
    }

    /// Create a new index.
    pub fn create(&self, uid: &str, primary_key: Option<&str>) -> Result<IndexInfo, Error> {
        let payload = CreateIndex {
            uid: uid.to_string(),
            primary_key: primary_key.map(str::to_string),
        };
        let body = serde_json::to_vec(&payload).map_err(Error::Encoding)?;
        let body = self.request.post("/indexes", body)?;
        decode_response(body)
    }

    /// Create the index, falling back to fetching it when creation fails.
    ///
    /// Any create failure triggers the fallback, and the fetch outcome
    /// replaces the create error: with status codes uninterpreted, an
    /// already-exists conflict is only distinguishable as "create failed".
    pub fn get_or_create(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<IndexInfo, Error> {
        match self.create(uid, primary_key) {
            Ok(info) => Ok(info),
            Err(create_err) => {
                debug!(uid, error = %create_err, "create failed, fetching existing index");
                self.index(uid).get()
            }
        }
    }
}

/// Per-index sub-client, keyed by the uid supplied at construction.
pub struct Index {
    request: Arc<RequestClient>,
    uid: String,
}

impl Index {
    pub(crate) fn new(request: Arc<RequestClient>, uid: &str) -> Self {
        Self {
            request,
            uid: uid.to_string(),
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn get(&self) -> Result<IndexInfo, Error> {
        let body = self.request.get(&format!("/indexes/{}", self.uid), None)?;
        decode_response(body)
    }

    /// Update the index's primary key.
    pub fn update(&self, primary_key: &str) -> Result<IndexInfo, Error> {
        let payload = UpdateIndex {
            primary_key: primary_key.to_string(),
        };
        let body = serde_json::to_vec(&payload).map_err(Error::Encoding)?;
        let body = self.request.put(&format!("/indexes/{}", self.uid), body)?;
        decode_response(body)
    }

    /// Delete the index. Success carries no payload; any body the server
    /// sends back is discarded.
    pub fn delete(&self) -> Result<(), Error> {
        self.request.delete(&format!("/indexes/{}", self.uid))?;
        Ok(())
    }

    pub fn stats(&self) -> Result<Stat, Error> {
        let body = self
            .request
            .get(&format!("/indexes/{}/stats", self.uid), None)?;
        decode_response(body)
    }
}
