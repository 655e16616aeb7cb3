use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Largest document accepted by default, in bytes.
pub const DEFAULT_MAX_LENGTH: usize = 400_000;

#[derive(Clone, Debug)]
pub struct StubConfig {
    /// When set, every route requires `Authorization: Bearer {token}`.
    pub token: Option<String>,
    pub max_length: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            token: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub key: String,
    pub data: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDocument {
    pub key: String,
    pub body: String,
}

pub struct Stub {
    config: StubConfig,
    documents: RwLock<HashMap<String, String>>,
}

pub type Shared = Arc<Stub>;

pub fn app(config: StubConfig) -> Router {
    // One past `max_length` so oversize bodies reach the handler's own 413.
    let body_limit = config.max_length.saturating_add(1);
    let stub: Shared = Arc::new(Stub {
        config,
        documents: RwLock::new(HashMap::new()),
    });
    Router::new()
        .route("/documents", post(create_document))
        .route("/documents/{code}", get(get_document))
        .route("/raw/{code}", get(get_raw))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(stub)
}

pub async fn run(listener: TcpListener, config: StubConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

/// Ten lowercase hex characters, the length hastebin keys use.
fn new_code() -> String {
    let mut code = Uuid::new_v4().simple().to_string();
    code.truncate(10);
    code
}

fn authorize(stub: &Stub, headers: &HeaderMap) -> Result<(), StatusCode> {
    let Some(token) = &stub.config.token else {
        return Ok(());
    };
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if presented == Some(token.as_str()) {
        Ok(())
    } else {
        tracing::warn!("rejected request with missing or wrong credential");
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn create_document(
    State(stub): State<Shared>,
    headers: HeaderMap,
    content: String,
) -> Result<Json<CreatedDocument>, StatusCode> {
    authorize(&stub, &headers)?;
    if content.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    if content.len() > stub.config.max_length {
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    let mut documents = stub.documents.write().await;
    let mut key = new_code();
    while documents.contains_key(&key) {
        key = new_code();
    }
    tracing::info!(%key, len = content.len(), "stored document");
    documents.insert(key.clone(), content);
    Ok(Json(CreatedDocument { key }))
}

async fn get_document(
    State(stub): State<Shared>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Json<Document>, StatusCode> {
    authorize(&stub, &headers)?;
    let documents = stub.documents.read().await;
    let data = documents.get(&code).cloned().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(Document { key: code, data }))
}

async fn get_raw(
    State(stub): State<Shared>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Json<RawDocument>, StatusCode> {
    authorize(&stub, &headers)?;
    let documents = stub.documents.read().await;
    let body = documents.get(&code).cloned().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RawDocument { key: code, body }))
}
