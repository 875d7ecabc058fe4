//! HTTP transport abstraction
//!
//! `ClashClient` and `TokenManager` only depend on the `HttpClient` trait, so
//! tests can substitute a fake transport and embedding applications can bring
//! their own HTTP stack.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;

/// A request described as plain data
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a GET request without headers
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request, tagging the body as JSON when present
    pub fn post(url: impl Into<String>, body: Option<String>) -> Self {
        let mut headers = HeaderMap::new();
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body,
        }
    }
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// Creates a response without headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if status is 403
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }
}

/// Trait for executing HTTP requests
///
/// Errors are transport-level only (DNS, connect, TLS, timeouts). Any
/// response that arrives, whatever its status, is returned as `Ok`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client that keeps cookies between requests
    ///
    /// The developer portal authenticates list/create/revoke calls with the
    /// session cookie set by login.
    pub fn with_cookie_store() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { inner })
    }

    /// Wraps an already configured reqwest client (timeouts, proxies, ...)
    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .inner
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.context("Failed to send request")?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockHttpClient;
    use super::*;
    use reqwest::header::CACHE_CONTROL;

    #[tokio::test]
    async fn mock_client_returns_configured_response() {
        let client = MockHttpClient::new().on_get("https://api.example.com/data", 200, "{}");

        let response = client
            .execute(&HttpRequest::get("https://api.example.com/data"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn response_headers_reach_the_caller() {
        let mut canned = HttpResponse::new(200, "[]");
        canned
            .headers
            .insert(CACHE_CONTROL, HeaderValue::from_static("public, max-age=120"));
        let client = MockHttpClient::new().on_response(
            Method::GET,
            "https://api.example.com/locations",
            canned,
        );

        let response = client
            .execute(&HttpRequest::get("https://api.example.com/locations"))
            .await
            .unwrap();

        assert_eq!(
            response.headers.get(CACHE_CONTROL).unwrap(),
            "public, max-age=120"
        );
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn mock_client_distinguishes_methods() {
        let client = MockHttpClient::new().on_post("https://api.example.com/login", 200, "{}");

        let result = client
            .execute(&HttpRequest::get("https://api.example.com/login"))
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No mock response configured"));
    }

    #[tokio::test]
    async fn mock_client_reports_transport_failures() {
        let client = MockHttpClient::new().on_failure(
            Method::GET,
            "https://api.example.com/down",
            "connection refused",
        );

        let result = client
            .execute(&HttpRequest::get("https://api.example.com/down"))
            .await;

        assert_eq!(result.unwrap_err().to_string(), "connection refused");
    }

    #[tokio::test]
    async fn mock_client_records_requests() {
        let client = MockHttpClient::new().on_post("https://api.example.com/test", 200, "{}");

        let request = HttpRequest::post(
            "https://api.example.com/test",
            Some(r#"{"id":"1"}"#.to_string()),
        );
        client.execute(&request).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].json_body()["id"], "1");
        assert_eq!(
            requests[0].headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn post_without_body_has_no_content_type() {
        let request = HttpRequest::post("https://api.example.com/list", None);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn http_response_is_success() {
        for (status, expected) in [(200, true), (204, true), (299, true), (300, false), (404, false)] {
            let response = HttpResponse::new(status, "");
            assert_eq!(response.is_success(), expected, "status {}", status);
        }
    }
}
