use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IconUrls;

/// War state as reported by `currentwar` and league war endpoints
///
/// Values this enum does not list are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarState {
    ClanNotFound,
    AccessDenied,
    NotInWar,
    InMatchmaking,
    EnterWar,
    Matched,
    Preparation,
    War,
    InWar,
    Ended,
    WarEnded,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarResult {
    Win,
    Lose,
    Tie,
    #[serde(untagged)]
    Other(String),
}

/// A regular or league war
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanWar {
    pub state: WarState,
    #[serde(default)]
    pub team_size: Option<i32>,
    #[serde(default)]
    pub attacks_per_member: Option<i32>,
    #[serde(default, with = "crate::time::option_timestamp")]
    pub preparation_start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::time::option_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::time::option_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clan: Option<WarClan>,
    #[serde(default)]
    pub opponent: Option<WarClan>,
}

/// One side of a war
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarClan {
    /// Absent for the opponent of a war against a deleted clan
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub badge_urls: Option<IconUrls>,
    #[serde(default)]
    pub clan_level: Option<i32>,
    #[serde(default)]
    pub attacks: Option<i32>,
    #[serde(default)]
    pub stars: Option<i32>,
    #[serde(default)]
    pub destruction_percentage: Option<f64>,
    #[serde(default)]
    pub exp_earned: Option<i32>,
    #[serde(default)]
    pub members: Option<Vec<WarMember>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub townhall_level: Option<i32>,
    #[serde(default)]
    pub map_position: Option<i32>,
    #[serde(default)]
    pub attacks: Option<Vec<WarAttack>>,
    #[serde(default)]
    pub opponent_attacks: Option<i32>,
    #[serde(default)]
    pub best_opponent_attack: Option<WarAttack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarAttack {
    pub attacker_tag: String,
    pub defender_tag: String,
    pub stars: i32,
    pub destruction_percentage: i32,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub duration: Option<i32>,
}

/// A finished war as listed in the war log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarLogEntry {
    /// Absent for league wars
    #[serde(default)]
    pub result: Option<WarResult>,
    #[serde(default, with = "crate::time::option_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team_size: Option<i32>,
    #[serde(default)]
    pub attacks_per_member: Option<i32>,
    pub clan: WarClan,
    pub opponent: WarClan,
}

/// A clan war league group for the current season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarLeagueGroup {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub clans: Option<Vec<WarLeagueClan>>,
    #[serde(default)]
    pub rounds: Option<Vec<WarLeagueRound>>,
}

impl WarLeagueGroup {
    /// War tags that have been drawn; unscheduled slots are reported as `#0`
    pub fn scheduled_war_tags(&self) -> Vec<&str> {
        self.rounds
            .iter()
            .flatten()
            .flat_map(|round| round.war_tags.iter())
            .map(String::as_str)
            .filter(|tag| *tag != "#0")
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarLeagueClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub clan_level: Option<i32>,
    #[serde(default)]
    pub badge_urls: Option<IconUrls>,
    #[serde(default)]
    pub members: Option<Vec<WarLeagueClanMember>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarLeagueClanMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub town_hall_level: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarLeagueRound {
    pub war_tags: Vec<String>,
}
