use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    /// Cursor for the next page, `None` at the end
    pub fn after(&self) -> Option<&str> {
        self.cursors().and_then(|c| non_empty(c.after.as_deref()))
    }

    /// Cursor for the previous page, `None` at the start
    pub fn before(&self) -> Option<&str> {
        self.cursors().and_then(|c| non_empty(c.before.as_deref()))
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn cursors(&self) -> Option<&Cursors> {
        self.paging.as_ref().and_then(|p| p.cursors.as_ref())
    }
}

fn non_empty(cursor: Option<&str>) -> Option<&str> {
    cursor.filter(|c| !c.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Option<Cursors>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUrls {
    #[serde(default)]
    pub tiny: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon_urls: Option<IconUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_country: Option<bool>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub localized_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPassSeason {
    #[serde(with = "crate::time::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_time: DateTime<Utc>,
}

impl GoldPassSeason {
    /// Returns true if `now` falls inside the season
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

/// Result of checking a player's in-game API token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub tag: String,
    pub token: String,
    pub status: String,
}

impl VerifyTokenResponse {
    pub fn is_valid(&self) -> bool {
        self.status == "ok"
    }
}
