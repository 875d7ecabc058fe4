//! Common test utilities for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use clash_api::{HttpClient, HttpRequest, HttpResponse};
use reqwest::header::HeaderValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

pub const API: &str = "https://api.clashofclans.com/v1";
pub const PORTAL: &str = "https://portal.test/api";
pub const IP_LOOKUP: &str = "https://ip.test";

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once per test binary; `RUST_LOG` controls output
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Fake transport answering by URL and recording every call
#[derive(Clone, Default)]
pub struct ScriptedHttp {
    routes: Arc<Mutex<HashMap<String, HttpResponse>>>,
    calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), HttpResponse::new(status, body));
        self
    }

    /// Adds a header to the response already routed for `url`
    pub fn header(self, url: &str, name: &'static str, value: &'static str) -> Self {
        if let Some(response) = self.routes.lock().unwrap().get_mut(url) {
            response
                .headers
                .insert(name, HeaderValue::from_static(value));
        }
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn body_of(&self, url: &str) -> Option<serde_json::Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u == url)
            .and_then(|(_, body)| body.as_deref().map(|b| serde_json::from_str(b).unwrap()))
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn execute(&self, request: &HttpRequest) -> anyhow::Result<HttpResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((request.url.clone(), request.body.clone()));

        let routes = self.routes.lock().unwrap();
        routes
            .get(&request.url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("connection refused: {}", request.url))
    }
}

/// Renders a developer-portal key
pub fn portal_key(id: &str, name: &str, ranges: &[&str], secret: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": "integration",
        "scopes": ["clash"],
        "cidrRanges": ranges,
        "key": secret,
    })
}
