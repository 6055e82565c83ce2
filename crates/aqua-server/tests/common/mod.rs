#![allow(dead_code)]

use aqua_config::BrokerConfig;
use aqua_core::{setup_schema, NodeVersionMap};
use aqua_middleware::{hash_password, JwtAuth};
use aqua_server::AppState;
use aqua_telemetry::TelemetryPublisher;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Request, StatusCode, Uri},
    Router,
};
use sea_orm::Database;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const USERNAME: &str = "operator";
pub const PASSWORD: &str = "correct horse";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub origin: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
pub struct FakeBroker {
    pub captured: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
}

impl FakeBroker {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record(
    State(broker): State<FakeBroker>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    broker.captured.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        origin: header("x-m2m-origin"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });
    broker.status
}

/// 在随机端口启动假 broker，返回 base_url
pub async fn spawn_broker(status: StatusCode) -> (String, FakeBroker) {
    let broker = FakeBroker {
        captured: Arc::new(Mutex::new(Vec::new())),
        status,
    };
    let app = Router::new().fallback(record).with_state(broker.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/~/in-cse/in-name", addr), broker)
}

/// 内存库 + 一个用户 + 节点 N1 (1,2,3) + 版本表 {N2: V3.2}
pub async fn create_test_state(broker_base_url: String) -> AppState {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    setup_schema(&db).await.expect("Failed to create schema");

    let versions = NodeVersionMap::new(HashMap::from([(
        "N2".to_string(),
        "V3.2".to_string(),
    )]));

    let publisher = TelemetryPublisher::new(BrokerConfig {
        base_url: broker_base_url,
        timeout_ms: 2_000,
        max_attempts: 2,
        retry_base_delay_ms: 10,
        ..Default::default()
    })
    .unwrap();

    let state = AppState::new(
        db,
        versions,
        publisher,
        JwtAuth::new("test-secret".to_string(), 5),
    );

    let hashed = hash_password(PASSWORD, 4).unwrap();
    state.users.ensure_user(USERNAME, &hashed).await.unwrap();
    state.coefficients.create("N1", "1,2,3").await.unwrap();
    state.coefficients.create("N2", "1,2,3").await.unwrap();

    state
}

pub fn bearer(state: &AppState) -> String {
    format!("Bearer {}", state.jwt.generate_token(USERNAME).unwrap())
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
