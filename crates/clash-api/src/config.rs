//! Client and credential configuration
//!
//! The library reads no files or environment variables itself. Both structs
//! deserialize with defaults so an embedding application can load them from
//! whatever source it already uses.

use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_BASE_URL: &str = "https://api.clashofclans.com/v1";
const DEFAULT_PORTAL_URL: &str = "https://developer.clashofclans.com/api";
const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org";

/// Settings for `ClashClient`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Developer-portal login and the key the token manager maintains
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Name of the managed key; a key with this name is rotated in place
    #[serde(default = "default_key_name")]
    pub key_name: String,
    #[serde(default = "default_key_description")]
    pub key_description: String,
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
    /// Service returning the caller's public IP as plain text
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
}

fn default_key_name() -> String {
    "clash-api".to_string()
}

fn default_key_description() -> String {
    "Created by clash-api".to_string()
}

fn default_portal_url() -> String {
    DEFAULT_PORTAL_URL.to_string()
}

fn default_ip_lookup_url() -> String {
    DEFAULT_IP_LOOKUP_URL.to_string()
}

impl Credentials {
    /// Creates credentials with the default key name and endpoints
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            key_name: default_key_name(),
            key_description: default_key_description(),
            portal_url: default_portal_url(),
            ip_lookup_url: default_ip_lookup_url(),
        }
    }

    /// Sets the name of the managed key
    pub fn key_name(mut self, name: impl Into<String>) -> Self {
        self.key_name = name.into();
        self
    }

    /// Sets the description given to newly created keys
    pub fn key_description(mut self, description: impl Into<String>) -> Self {
        self.key_description = description.into();
        self
    }

    /// Points the token manager at another portal (used by tests)
    pub fn portal_url(mut self, url: impl Into<String>) -> Self {
        self.portal_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Points the token manager at another IP lookup service
    pub fn ip_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.ip_lookup_url = url.into();
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("key_name", &self.key_name)
            .field("key_description", &self.key_description)
            .field("portal_url", &self.portal_url)
            .field("ip_lookup_url", &self.ip_lookup_url)
            .finish()
    }
}
