//! The public facade: one configuration, one client per server capability.
//!
//! # Design
//! `MeiliClient` validates its configuration once at construction, then
//! eagerly builds every resource client around a single shared
//! `RequestClient`. Nothing holds mutable state afterwards, so a client can
//! be shared freely across threads. Every method is a direct pass-through to
//! the owning resource client; `is_healthy` is the one derived convenience.

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::dumps::Dumps;
use crate::error::Error;
use crate::indexes::{Index, Indexes};
use crate::keys::Keys;
use crate::request::RequestClient;
use crate::stats::Stats;
use crate::system::System;
use crate::types::{AllStats, Dump, Health, IndexInfo, Key, Stat, Version};

#[derive(Debug)]
pub struct MeiliClient {
    config: Config,
    keys: Keys,
    stats: Stats,
    system: System,
    dumps: Dumps,
    indexes: Indexes,
}

impl MeiliClient {
    /// Build a client against `host` with the default transport. Fails fast
    /// when the host is not a usable URL.
    pub fn new(host: &str, api_key: Option<&str>) -> Result<Self, Error> {
        Ok(Self::with_config(Config::new(host, api_key)?))
    }

    /// Build a client from an already-validated configuration, typically one
    /// carrying a custom transport.
    pub fn with_config(config: Config) -> Self {
        let request = Arc::new(RequestClient::new(config.clone()));
        Self {
            config,
            keys: Keys::new(Arc::clone(&request)),
            stats: Stats::new(Arc::clone(&request)),
            system: System::new(Arc::clone(&request)),
            dumps: Dumps::new(Arc::clone(&request)),
            indexes: Indexes::new(request),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Indexes

    /// Handle for one index, keyed by the caller-supplied uid.
    pub fn index(&self, uid: &str) -> Index {
        self.indexes.index(uid)
    }

    pub fn create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<IndexInfo, Error> {
        self.indexes.create(uid, primary_key)
    }

    pub fn get_or_create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<IndexInfo, Error> {
        self.indexes.get_or_create(uid, primary_key)
    }

    pub fn get_index(&self, uid: &str) -> Result<IndexInfo, Error> {
        self.index(uid).get()
    }

    pub fn list_indexes(&self) -> Result<Vec<IndexInfo>, Error> {
        self.indexes.list()
    }

    pub fn update_index(&self, uid: &str, primary_key: &str) -> Result<IndexInfo, Error> {
        self.index(uid).update(primary_key)
    }

    pub fn delete_index(&self, uid: &str) -> Result<(), Error> {
        self.index(uid).delete()
    }

    // Keys

    pub fn keys(&self) -> Result<Key, Error> {
        self.keys.get()
    }

    // Stats

    pub fn all_stats(&self) -> Result<AllStats, Error> {
        self.stats.all_stats()
    }

    pub fn stats(&self, uid: &str) -> Result<Stat, Error> {
        self.stats.stats(uid)
    }

    // System

    pub fn health(&self) -> Result<Health, Error> {
        self.system.health()
    }

    /// `true` iff the health check succeeds. The failure detail is logged
    /// and discarded.
    pub fn is_healthy(&self) -> bool {
        match self.health() {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "health check failed");
                false
            }
        }
    }

    pub fn version(&self) -> Result<Version, Error> {
        self.system.version()
    }

    // Dumps

    pub fn create_dump(&self) -> Result<Dump, Error> {
        self.dumps.create()
    }

    pub fn get_dump_status(&self, uid: &str) -> Result<Dump, Error> {
        self.dumps.status(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    fn client(mock: &Arc<MockTransport>) -> MeiliClient {
        let config =
            Config::with_transport("http://localhost:7700", Some("masterKey"), mock.clone())
                .unwrap();
        MeiliClient::with_config(config)
    }

    #[test]
    fn new_rejects_invalid_host() {
        let err = MeiliClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, Error::InvalidHost(_)));
    }

    #[test]
    fn is_healthy_true_on_success() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"status":"available"}"#);
        assert!(client(&mock).is_healthy());
    }

    #[test]
    fn is_healthy_false_on_transport_error() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_error("connection refused");
        assert!(!client(&mock).is_healthy());
    }

    #[test]
    fn is_healthy_false_on_decoding_error() {
        // Any failure kind collapses to false, not just transport ones.
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"unexpected":"shape"}"#);
        assert!(!client(&mock).is_healthy());
    }

    #[test]
    fn is_healthy_false_on_absent_body() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_empty();
        assert!(!client(&mock).is_healthy());
    }

    #[test]
    fn keys_passes_through_to_resource_client() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"key":"abc123"}"#);
        let key = client(&mock).keys().unwrap();

        assert_eq!(key.key, "abc123");
        assert_eq!(mock.requests()[0].url, "http://localhost:7700/keys");
    }

    #[test]
    fn index_handle_carries_the_uid() {
        let mock = Arc::new(MockTransport::new());
        let index = client(&mock).index("movies");
        assert_eq!(index.uid(), "movies");
    }

    #[test]
    fn every_operation_dispatches_exactly_once() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"status":"available"}"#);
        mock.reply_json(r#"{"key":"abc123"}"#);
        mock.reply_json(r#"{"databaseSize":0,"lastUpdate":null,"indexes":{}}"#);
        let client = client(&mock);

        client.health().unwrap();
        client.keys().unwrap();
        client.all_stats().unwrap();

        assert_eq!(mock.requests().len(), 3);
    }
}
