use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// An API key as reported by the developer portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    #[serde(default)]
    pub developer_id: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origins: Option<Vec<String>>,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub cidr_ranges: Option<Vec<String>>,
    /// Expiry as reported by the portal, if the key has one
    #[serde(default)]
    pub valid_until: Option<String>,
    /// The secret sent as bearer token
    pub key: String,
}

impl ApiKey {
    /// Returns the CIDR ranges, empty when the portal sent none
    pub fn ranges(&self) -> &[String] {
        self.cidr_ranges.as_deref().unwrap_or_default()
    }

    /// Returns true if any range admits the address
    pub fn allows(&self, ip: IpAddr) -> bool {
        self.ranges().iter().any(|range| cidr_contains(range, ip))
    }
}

/// Response of `POST /apikey/list`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KeyList {
    pub keys: Vec<ApiKey>,
}

/// Response of `POST /apikey/create`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedKey {
    pub key: ApiKey,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateKeyRequest<'a> {
    pub cidr_ranges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RevokeKeyRequest<'a> {
    pub id: &'a str,
}

/// What to do with the account's keys for the current IP
#[derive(Debug, PartialEq)]
pub enum KeySelection<'a> {
    /// A key already admits the IP
    Valid(&'a ApiKey),
    /// The named key exists but not for this IP; replace it
    Stale(&'a ApiKey),
    /// Nothing usable; create a fresh key
    Missing,
}

/// Picks a key from a single listing
///
/// An IP match wins over a name match so that a valid key is reused even when
/// another key carries the configured name.
pub fn select_key<'a>(keys: &'a [ApiKey], ip: IpAddr, name: &str) -> KeySelection<'a> {
    if let Some(key) = keys.iter().find(|k| k.allows(ip)) {
        return KeySelection::Valid(key);
    }
    match keys.iter().find(|k| k.name == name) {
        Some(key) => KeySelection::Stale(key),
        None => KeySelection::Missing,
    }
}

/// Existing ranges plus the address, keeping order and skipping duplicates
pub fn ranges_with(existing: &[String], ip: IpAddr) -> Vec<String> {
    let ip = ip.to_string();
    let mut ranges = existing.to_vec();
    if !ranges.contains(&ip) {
        ranges.push(ip);
    }
    ranges
}

/// Checks whether `range` (CIDR or bare address) contains `ip`
pub fn cidr_contains(range: &str, ip: IpAddr) -> bool {
    let (addr, prefix) = match range.trim().split_once('/') {
        Some((addr, prefix)) => match prefix.parse::<u32>() {
            Ok(prefix) => (addr, Some(prefix)),
            Err(_) => return false,
        },
        None => (range.trim(), None),
    };

    let Ok(network) = addr.parse::<IpAddr>() else {
        return false;
    };

    match (network, ip) {
        (IpAddr::V4(network), IpAddr::V4(ip)) => {
            let prefix = prefix.unwrap_or(32);
            prefix <= 32 && masked(u32::from(network).into(), u32::from(ip).into(), prefix, 32)
        }
        (IpAddr::V6(network), IpAddr::V6(ip)) => {
            let prefix = prefix.unwrap_or(128);
            prefix <= 128 && masked(u128::from(network), u128::from(ip), prefix, 128)
        }
        _ => false,
    }
}

fn masked(network: u128, ip: u128, prefix: u32, bits: u32) -> bool {
    if prefix == 0 {
        return true;
    }
    let shift = bits - prefix;
    (network >> shift) == (ip >> shift)
}
