//! In-process mock of the agent service.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use sazed_mcp::AgentSettings;
use serde_json::Value;

pub const TEST_API_KEY: &str = "test-api-key";

/// A request received by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    location: Option<String>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Agent service stub bound to an ephemeral loopback port.
pub struct MockAgent {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockAgent {
    /// Starts a mock that answers every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    /// Like [`MockAgent::start`], but waits `delay` before answering.
    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        Self::spawn(status, body, delay, None).await
    }

    /// Starts a mock that answers every request with `status` and a
    /// `Location: {location}` header.
    pub async fn start_redirect(status: u16, location: &str) -> Self {
        Self::spawn(status, "", Duration::ZERO, Some(location.to_string())).await
    }

    async fn spawn(status: u16, body: &str, delay: Duration, location: Option<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
            delay,
            location,
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(record).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|_| unreachable!());
        let addr = listener.local_addr().unwrap_or_else(|_| unreachable!());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Settings pointing at this mock.
    pub fn settings(&self) -> AgentSettings {
        AgentSettings::builder()
            .base_url(&self.url)
            .api_key(TEST_API_KEY)
            .build()
            .unwrap_or_else(|_| unreachable!())
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Recorded {
            method,
            path: uri.path().to_string(),
            api_key: header_value("x-api-key"),
            content_type: header_value("content-type"),
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    match state.location {
        Some(location) => {
            (state.status, [(header::LOCATION, location)], state.body).into_response()
        }
        None => (state.status, state.body).into_response(),
    }
}
