//! Domain DTOs decoded from Meilisearch responses.
//!
//! # Design
//! Response types carry `deny_unknown_fields`: decoding is strict, so a
//! schema drift on the server surfaces as a decoding error instead of a
//! silently partial value. Request payloads stay permissive — the server
//! owns their validation. Wire field names are camelCase.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The API key record returned by `GET /keys`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Key {
    pub key: String,
}

/// Server liveness as reported by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Health {
    pub status: String,
}

/// Build information from `GET /version`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Version {
    pub commit_sha: String,
    pub build_date: DateTime<Utc>,
    pub pkg_version: String,
}

/// A dump creation task and its current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Dump {
    pub uid: String,
    pub status: DumpStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DumpStatus {
    InProgress,
    Failed,
    Done,
}

/// Aggregate statistics over every index, from `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllStats {
    pub database_size: u64,
    pub last_update: Option<DateTime<Utc>>,
    pub indexes: HashMap<String, Stat>,
}

/// Statistics for one index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stat {
    pub number_of_documents: u64,
    pub is_indexing: bool,
    pub fields_distribution: HashMap<String, u64>,
}

/// Index metadata as returned by the `/indexes` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexInfo {
    pub uid: String,
    pub name: Option<String>,
    pub primary_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for `POST /indexes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndex {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
}

/// Request payload for `PUT /indexes/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIndex {
    pub primary_key: String,
}
