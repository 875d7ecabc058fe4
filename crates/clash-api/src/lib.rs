//! Typed async client for the Clash of Clans public API
//!
//! `ClashClient` issues one request per endpoint and returns typed records or
//! an `ApiError`. `TokenManager` obtains a key bound to the caller's current
//! public IP from the developer portal, rotating the configured key when the
//! IP has changed.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod paths;
pub mod response;
pub mod time;

#[cfg(test)]
mod testutil;

pub use auth::{ApiKey, TokenManager};
pub use client::ClashClient;
pub use config::{ClientConfig, Credentials};
pub use error::{ApiError, ClientError, TokenError};
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
pub use models::Page;
pub use paths::PageParams;
