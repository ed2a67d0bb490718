//! In-memory mock of the Meilisearch endpoints the SDK consumes.
//!
//! # Design
//! One `Router` over shared `ServerState` behind an `RwLock`. Error bodies
//! are Meilisearch-shaped `{"message": ...}` JSON so a client decoding a
//! missing-index response fails the way it would against the real server.
//! Dump creation is instantaneous: the response says `in_progress`, the
//! stored record is already `done`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    pub uid: String,
    pub name: String,
    pub primary_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexBody {
    pub uid: String,
    pub primary_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIndexBody {
    pub primary_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DumpRecord {
    pub uid: String,
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Default)]
pub struct ServerState {
    pub indexes: HashMap<String, IndexRecord>,
    pub dumps: HashMap<String, DumpRecord>,
}

pub type Db = Arc<RwLock<ServerState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(ServerState::default()));
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/keys", get(keys))
        .route("/stats", get(all_stats))
        .route("/indexes", get(list_indexes).post(create_index))
        .route(
            "/indexes/{uid}",
            get(get_index).put(update_index).delete(delete_index),
        )
        .route("/indexes/{uid}/stats", get(index_stats))
        .route("/dumps", post(create_dump))
        .route("/dumps/{uid}/status", get(dump_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(what: &str) -> (StatusCode, Json<ErrorMessage>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage {
            message: format!("{what} not found"),
        }),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "available"}))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "commitSha": "b46889b5f0f2f8b91438a08a358ba8f05fc09fc1",
        "buildDate": "2019-11-15T09:51:54.278247+00:00",
        "pkgVersion": "0.1.1",
    }))
}

/// Echoes the presented API key back, so client tests can prove the header
/// actually made it onto the wire.
async fn keys(headers: HeaderMap) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorMessage>)> {
    match headers.get("X-Meili-API-Key").and_then(|v| v.to_str().ok()) {
        Some(key) => Ok(Json(serde_json::json!({"key": key}))),
        None => Err((
            StatusCode::FORBIDDEN,
            Json(ErrorMessage {
                message: "missing X-Meili-API-Key header".to_string(),
            }),
        )),
    }
}

fn empty_stat() -> serde_json::Value {
    serde_json::json!({
        "numberOfDocuments": 0,
        "isIndexing": false,
        "fieldsDistribution": {},
    })
}

async fn all_stats(State(db): State<Db>) -> Json<serde_json::Value> {
    let state = db.read().await;
    let indexes: serde_json::Map<String, serde_json::Value> = state
        .indexes
        .keys()
        .map(|uid| (uid.clone(), empty_stat()))
        .collect();
    Json(serde_json::json!({
        "databaseSize": 0,
        "lastUpdate": null,
        "indexes": indexes,
    }))
}

async fn index_stats(
    State(db): State<Db>,
    Path(uid): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorMessage>)> {
    let state = db.read().await;
    if !state.indexes.contains_key(&uid) {
        return Err(not_found(&format!("Index {uid}")));
    }
    Ok(Json(empty_stat()))
}

async fn list_indexes(State(db): State<Db>) -> Json<Vec<IndexRecord>> {
    let state = db.read().await;
    Json(state.indexes.values().cloned().collect())
}

async fn create_index(
    State(db): State<Db>,
    Json(input): Json<CreateIndexBody>,
) -> Result<(StatusCode, Json<IndexRecord>), (StatusCode, Json<ErrorMessage>)> {
    let mut state = db.write().await;
    if state.indexes.contains_key(&input.uid) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                message: format!("Index {} already exists", input.uid),
            }),
        ));
    }
    let now = Utc::now();
    let record = IndexRecord {
        uid: input.uid.clone(),
        name: input.uid.clone(),
        primary_key: input.primary_key,
        created_at: now,
        updated_at: now,
    };
    state.indexes.insert(input.uid, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_index(
    State(db): State<Db>,
    Path(uid): Path<String>,
) -> Result<Json<IndexRecord>, (StatusCode, Json<ErrorMessage>)> {
    let state = db.read().await;
    state
        .indexes
        .get(&uid)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&format!("Index {uid}")))
}

async fn update_index(
    State(db): State<Db>,
    Path(uid): Path<String>,
    Json(input): Json<UpdateIndexBody>,
) -> Result<Json<IndexRecord>, (StatusCode, Json<ErrorMessage>)> {
    let mut state = db.write().await;
    let record = state
        .indexes
        .get_mut(&uid)
        .ok_or_else(|| not_found(&format!("Index {uid}")))?;
    record.primary_key = Some(input.primary_key);
    record.updated_at = Utc::now();
    Ok(Json(record.clone()))
}

async fn delete_index(
    State(db): State<Db>,
    Path(uid): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorMessage>)> {
    let mut state = db.write().await;
    state
        .indexes
        .remove(&uid)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found(&format!("Index {uid}")))
}

async fn create_dump(State(db): State<Db>) -> Json<DumpRecord> {
    let uid = Uuid::new_v4().to_string();
    let mut state = db.write().await;
    state.dumps.insert(
        uid.clone(),
        DumpRecord {
            uid: uid.clone(),
            status: "done".to_string(),
        },
    );
    Json(DumpRecord {
        uid,
        status: "in_progress".to_string(),
    })
}

async fn dump_status(
    State(db): State<Db>,
    Path(uid): Path<String>,
) -> Result<Json<DumpRecord>, (StatusCode, Json<ErrorMessage>)> {
    let state = db.read().await;
    state
        .dumps
        .get(&uid)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&format!("Dump {uid}")))
}
