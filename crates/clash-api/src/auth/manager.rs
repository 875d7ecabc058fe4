use serde::de::DeserializeOwned;
use serde::Serialize;
use std::net::IpAddr;

use super::keys::{
    ranges_with, select_key, ApiKey, CreateKeyRequest, CreatedKey, KeyList, KeySelection,
    RevokeKeyRequest,
};
use crate::config::Credentials;
use crate::error::TokenError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Obtains a bearer token valid for the caller's current public IP
///
/// Keys issued by the developer portal only work from the addresses listed
/// in their CIDR ranges, so machines without a fixed IP need to look up
/// their address and reuse, rotate or create a key on every start.
///
/// The steps are not transactional: two processes rotating keys for the same
/// account at once can race, and the last writer wins.
pub struct TokenManager<H: HttpClient = ReqwestClient> {
    http: H,
    credentials: Credentials,
}

impl TokenManager<ReqwestClient> {
    /// Creates a token manager with a cookie-keeping reqwest client
    ///
    /// A client that cannot be built (TLS backend setup) is reported as
    /// `KeyRetrieval`; no request has been made at that point.
    pub fn new(credentials: Credentials) -> Result<Self, TokenError> {
        let http = ReqwestClient::with_cookie_store()
            .map_err(|e| TokenError::KeyRetrieval(format!("{:#}", e)))?;
        Ok(Self { http, credentials })
    }
}

impl<H: HttpClient> TokenManager<H> {
    /// Creates a token manager over a custom transport
    ///
    /// The transport must replay the session cookie set by login.
    pub fn with_http_client(credentials: Credentials, http: H) -> Self {
        Self { http, credentials }
    }

    /// Runs the full protocol and returns the key secret
    ///
    /// Every step short-circuits on failure; nothing is retried.
    pub async fn token(&self) -> Result<String, TokenError> {
        let ip = self.current_ip().await?;
        self.login().await?;
        let keys = self.list_keys().await?;

        let key = match select_key(&keys, ip, &self.credentials.key_name) {
            KeySelection::Valid(key) => {
                tracing::info!("Reusing API key {} for {}", key.id, ip);
                return Ok(key.key.clone());
            }
            KeySelection::Stale(key) => {
                tracing::info!("API key {} does not allow {}, rotating", key.id, ip);
                self.revoke_key(key).await?;
                self.create_key(ranges_with(key.ranges(), ip)).await?
            }
            KeySelection::Missing => {
                tracing::info!(
                    "No API key named {} found, creating one for {}",
                    self.credentials.key_name,
                    ip
                );
                self.create_key(vec![ip.to_string()]).await?
            }
        };

        Ok(key.key)
    }

    /// Looks up the public IP address requests leave from
    pub async fn current_ip(&self) -> Result<IpAddr, TokenError> {
        let request = HttpRequest::get(self.credentials.ip_lookup_url.as_str());
        let response = self
            .send(&request)
            .await
            .map_err(TokenError::KeyRetrieval)?;

        if !response.is_success() {
            return Err(TokenError::KeyRetrieval(format!(
                "IP lookup returned {}",
                response.status
            )));
        }

        response.body.trim().parse().map_err(|_| {
            TokenError::Deserialization(format!(
                "IP lookup returned {:?}, not an address",
                response.body.trim()
            ))
        })
    }

    /// Logs in to the developer portal
    ///
    /// Only 403 means bad credentials; any other reply counts as logged in,
    /// which keeps repeated logins harmless.
    pub async fn login(&self) -> Result<(), TokenError> {
        let body = to_json(&LoginRequest {
            email: &self.credentials.email,
            password: &self.credentials.password,
        })
        .map_err(TokenError::Login)?;

        let response = self
            .post("/login", Some(body))
            .await
            .map_err(TokenError::Login)?;

        if response.is_forbidden() {
            return Err(TokenError::Login(format!(
                "Invalid credentials for {}",
                self.credentials.email
            )));
        }

        tracing::debug!("Logged in to developer portal as {}", self.credentials.email);
        Ok(())
    }

    /// Lists the account's API keys
    pub async fn list_keys(&self) -> Result<Vec<ApiKey>, TokenError> {
        let response = self
            .post("/apikey/list", None)
            .await
            .map_err(TokenError::KeyRetrieval)?;

        if !response.is_success() {
            return Err(TokenError::KeyRetrieval(status_message(&response)));
        }

        let list: KeyList = parse(&response.body)?;
        tracing::debug!("Account has {} API keys", list.keys.len());
        Ok(list.keys)
    }

    /// Creates a key with the configured name and description
    pub async fn create_key(&self, cidr_ranges: Vec<String>) -> Result<ApiKey, TokenError> {
        let body = to_json(&CreateKeyRequest {
            cidr_ranges,
            name: Some(&self.credentials.key_name),
            description: Some(&self.credentials.key_description),
        })
        .map_err(TokenError::CreateApiKey)?;

        let response = self
            .post("/apikey/create", Some(body))
            .await
            .map_err(TokenError::CreateApiKey)?;

        if !response.is_success() {
            return Err(TokenError::CreateApiKey(status_message(&response)));
        }

        let created: CreatedKey = parse(&response.body)?;
        tracing::info!("Created API key {}", created.key.id);
        Ok(created.key)
    }

    /// Revokes a key
    pub async fn revoke_key(&self, key: &ApiKey) -> Result<(), TokenError> {
        let body = to_json(&RevokeKeyRequest { id: &key.id }).map_err(TokenError::DeleteApiKey)?;

        let response = self
            .post("/apikey/revoke", Some(body))
            .await
            .map_err(TokenError::DeleteApiKey)?;

        if !response.is_success() {
            return Err(TokenError::DeleteApiKey(status_message(&response)));
        }

        tracing::info!("Revoked API key {}", key.id);
        Ok(())
    }

    async fn post(&self, path: &str, body: Option<String>) -> Result<HttpResponse, String> {
        let url = format!("{}{}", self.credentials.portal_url, path);
        self.send(&HttpRequest::post(url, body)).await
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        tracing::debug!("{} {}", request.method, request.url);
        self.http
            .execute(request)
            .await
            .map_err(|e| format!("{:#}", e))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, TokenError> {
    serde_json::from_str(body).map_err(|e| TokenError::Deserialization(e.to_string()))
}

fn status_message(response: &HttpResponse) -> String {
    format!("portal returned {}: {}", response.status, response.body.trim())
}
