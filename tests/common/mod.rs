//! Shared helpers for the integration tests.
//!
//! [`FakeMoenvApi`] serves a canned response on `127.0.0.1:<random>` and
//! records the query string of every request it sees.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use moenv_aqi::AppConfig;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Default)]
struct ApiState {
    response: Option<CannedResponse>,
    requests: Vec<(String, HashMap<String, String>)>,
}

/// Handle to the running fake upstream.
pub struct FakeMoenvApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeMoenvApi {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            response: Some(CannedResponse { status, body: body.into() }),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/v2/{dataset}", get(serve_dataset))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Replaces the response served from now on.
    pub async fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        self.state.lock().await.response = Some(CannedResponse { status, body: body.into() });
    }

    pub async fn requests(&self) -> Vec<(String, HashMap<String, String>)> {
        self.state.lock().await.requests.clone()
    }

    /// Config pointed at this server and at `output_path`.
    pub fn config(&self, output_path: &std::path::Path) -> AppConfig {
        let mut cfg = AppConfig::new("aqx_p_432".into(), "test-key".into());
        cfg.base_url_template = format!("http://{}/api/v2/{{dataset}}", self.addr);
        cfg.output_path = output_path.display().to_string();
        cfg
    }
}

async fn serve_dataset(
    State(state): State<Arc<Mutex<ApiState>>>,
    Path(dataset): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.requests.push((dataset, params));
    match &state.response {
        Some(r) => (r.status, r.body.clone()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

/// Upstream body with `n` records shaped like the real dataset.
pub fn records_body(n: usize, site_prefix: &str) -> String {
    let records: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "SiteName": format!("{site_prefix}{i}"),
                "County": "臺北市",
                "AQI": (30 + i).to_string(),
                "PM2.5": i,
                "Status": "良好",
            })
        })
        .collect();
    serde_json::json!({ "total": n.to_string(), "records": records }).to_string()
}
