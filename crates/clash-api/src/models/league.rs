use serde::{Deserialize, Serialize};

use super::IconUrls;

/// Home village trophy league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon_urls: Option<IconUrls>,
}

/// Clan war league tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarLeague {
    pub id: i64,
    pub name: String,
}

/// Clan capital league tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalLeague {
    pub id: i64,
    pub name: String,
}

/// Builder base trophy league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderBaseLeague {
    pub id: i64,
    pub name: String,
}

/// A legend league season, identified as `YYYY-MM`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSeason {
    pub id: String,
}
