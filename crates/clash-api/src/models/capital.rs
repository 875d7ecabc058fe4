use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clan capital raid weekend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalRaidSeason {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(with = "crate::time::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub capital_total_loot: Option<i64>,
    #[serde(default)]
    pub raids_completed: Option<i32>,
    #[serde(default)]
    pub total_attacks: Option<i32>,
    #[serde(default)]
    pub enemy_districts_destroyed: Option<i32>,
    #[serde(default)]
    pub offensive_reward: Option<i32>,
    #[serde(default)]
    pub defensive_reward: Option<i32>,
    #[serde(default)]
    pub members: Option<Vec<CapitalRaidMember>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalRaidMember {
    pub tag: String,
    pub name: String,
    pub attacks: i32,
    pub attack_limit: i32,
    #[serde(default)]
    pub bonus_attack_limit: Option<i32>,
    pub capital_resources_looted: i64,
}

impl CapitalRaidMember {
    /// Attacks left, counting earned bonus attacks
    pub fn attacks_remaining(&self) -> i32 {
        (self.attack_limit + self.bonus_attack_limit.unwrap_or(0) - self.attacks).max(0)
    }
}
