use serde::{Deserialize, Serialize};

use super::{BuilderBaseLeague, ClanRole, IconUrls, Label, League};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub town_hall_level: Option<i32>,
    #[serde(default)]
    pub town_hall_weapon_level: Option<i32>,
    #[serde(default)]
    pub exp_level: Option<i32>,
    #[serde(default)]
    pub trophies: Option<i32>,
    #[serde(default)]
    pub best_trophies: Option<i32>,
    #[serde(default)]
    pub war_stars: Option<i32>,
    #[serde(default)]
    pub attack_wins: Option<i32>,
    #[serde(default)]
    pub defense_wins: Option<i32>,
    #[serde(default)]
    pub builder_hall_level: Option<i32>,
    #[serde(default)]
    pub builder_base_trophies: Option<i32>,
    #[serde(default)]
    pub best_builder_base_trophies: Option<i32>,
    #[serde(default)]
    pub role: Option<ClanRole>,
    #[serde(default)]
    pub war_preference: Option<String>,
    #[serde(default)]
    pub donations: Option<i32>,
    #[serde(default)]
    pub donations_received: Option<i32>,
    #[serde(default)]
    pub clan_capital_contributions: Option<i64>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    #[serde(default)]
    pub league: Option<League>,
    #[serde(default)]
    pub builder_base_league: Option<BuilderBaseLeague>,
    #[serde(default)]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
    #[serde(default)]
    pub troops: Option<Vec<UnitLevel>>,
    #[serde(default)]
    pub heroes: Option<Vec<UnitLevel>>,
    #[serde(default)]
    pub spells: Option<Vec<UnitLevel>>,
}

impl Player {
    /// Returns true if the player opted in to clan wars
    pub fn is_war_opted_in(&self) -> bool {
        self.war_preference.as_deref() == Some("in")
    }
}

/// The clan a player belongs to, as embedded in player records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub clan_level: Option<i32>,
    #[serde(default)]
    pub badge_urls: Option<IconUrls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub name: String,
    pub stars: i32,
    pub value: i64,
    pub target: i64,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub completion_info: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

/// Level of a troop, hero or spell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitLevel {
    pub name: String,
    pub level: i32,
    pub max_level: i32,
    #[serde(default)]
    pub village: Option<String>,
}

impl UnitLevel {
    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }
}
