//! In-process fake of the remote directory API used by the unit tests.

use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

use crate::config::Settings;

#[derive(Default)]
struct FakeDirectoryState {
    collections: HashMap<String, Vec<Value>>,
    next_id: u64,
    failing: bool,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeDirectory {
    inner: Arc<Mutex<FakeDirectoryState>>,
}

impl FakeDirectory {
    pub(crate) async fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut guard = self.inner.lock().await;
        guard
            .collections
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    /// Every handler answers 500 while set.
    pub(crate) async fn set_failing(&self, failing: bool) {
        self.inner.lock().await.failing = failing;
    }

    pub(crate) async fn records(&self, collection: &str) -> Vec<Value> {
        let guard = self.inner.lock().await;
        guard
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) async fn requests(&self) -> Vec<String> {
        self.inner.lock().await.requests.clone()
    }
}

async fn list_records(
    State(state): State<FakeDirectory>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let mut guard = state.inner.lock().await;
    guard.requests.push(format!("GET {collection}"));
    if guard.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(
        guard
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default(),
    ))
}

async fn create_record(
    State(state): State<FakeDirectory>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut guard = state.inner.lock().await;
    guard.requests.push(format!("POST {collection}"));
    if guard.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    guard.next_id += 1;
    body["_id"] = json!(format!("srv-{}", guard.next_id));
    guard
        .collections
        .entry(collection)
        .or_default()
        .push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn update_record(
    State(state): State<FakeDirectory>,
    Path((collection, id)): Path<(String, String)>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut guard = state.inner.lock().await;
    guard.requests.push(format!("PUT {collection}/{id}"));
    if guard.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let records = guard
        .collections
        .get_mut(&collection)
        .ok_or(StatusCode::NOT_FOUND)?;
    let slot = records
        .iter_mut()
        .find(|r| r["_id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    body["_id"] = json!(id);
    *slot = body.clone();
    Ok(Json(body))
}

async fn delete_record(
    State(state): State<FakeDirectory>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let mut guard = state.inner.lock().await;
    guard.requests.push(format!("DELETE {collection}/{id}"));
    if guard.failing {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let records = guard
        .collections
        .get_mut(&collection)
        .ok_or(StatusCode::NOT_FOUND)?;
    let before = records.len();
    records.retain(|r| r["_id"] != id.as_str());
    if records.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "message": "deleted" })))
}

pub(crate) async fn spawn_fake_directory() -> Result<(String, FakeDirectory)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = FakeDirectory::default();
    let app = Router::new()
        .route("/api/:collection", get(list_records).post(create_record))
        .route("/api/:collection/:id", put(update_record).delete(delete_record))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), state))
}

/// Address nothing listens on, for transport failures.
pub(crate) async fn unreachable_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

pub(crate) fn settings_for(server_url: &str) -> Settings {
    Settings {
        api_base_url: format!("{server_url}/api"),
        ..Settings::default()
    }
}

pub(crate) fn committee_json(
    id: &str,
    committee: &str,
    name: &str,
    number: &str,
    color: Option<&str>,
) -> Value {
    let mut value = json!({
        "_id": id,
        "samiti": committee,
        "name": name,
        "number": number,
        "__v": 0,
    });
    if let Some(color) = color {
        value["color"] = json!(color);
    }
    value
}

pub(crate) fn contact_json(id: &str, name: &str, number: &str) -> Value {
    json!({ "_id": id, "name": name, "number": number })
}
