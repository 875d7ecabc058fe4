use serde::{Deserialize, Serialize};

use super::{BuilderBaseLeague, CapitalLeague, IconUrls, Label, League, Location, WarLeague};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClanRole {
    NotMember,
    Member,
    /// Shown in game as "Elder"
    Admin,
    CoLeader,
    Leader,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClanType {
    Open,
    InviteOnly,
    Closed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarFrequency {
    Unknown,
    Always,
    MoreThanOncePerWeek,
    OncePerWeek,
    LessThanOncePerWeek,
    Never,
    Any,
    #[serde(untagged)]
    Other(String),
}

impl WarFrequency {
    pub(crate) fn as_query(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Always => "always",
            Self::MoreThanOncePerWeek => "moreThanOncePerWeek",
            Self::OncePerWeek => "oncePerWeek",
            Self::LessThanOncePerWeek => "lessThanOncePerWeek",
            Self::Never => "never",
            Self::Any => "any",
            Self::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    pub tag: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub clan_type: Option<ClanType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub is_family_friendly: Option<bool>,
    #[serde(default)]
    pub badge_urls: Option<IconUrls>,
    #[serde(default)]
    pub clan_level: Option<i32>,
    #[serde(default)]
    pub clan_points: Option<i32>,
    #[serde(default)]
    pub clan_builder_base_points: Option<i32>,
    #[serde(default)]
    pub clan_capital_points: Option<i32>,
    #[serde(default)]
    pub capital_league: Option<CapitalLeague>,
    #[serde(default)]
    pub required_trophies: Option<i32>,
    #[serde(default)]
    pub required_builder_base_trophies: Option<i32>,
    #[serde(default)]
    pub required_townhall_level: Option<i32>,
    #[serde(default)]
    pub war_frequency: Option<WarFrequency>,
    #[serde(default)]
    pub war_win_streak: Option<i32>,
    #[serde(default)]
    pub war_wins: Option<i32>,
    #[serde(default)]
    pub war_ties: Option<i32>,
    #[serde(default)]
    pub war_losses: Option<i32>,
    #[serde(default)]
    pub is_war_log_public: Option<bool>,
    #[serde(default)]
    pub war_league: Option<WarLeague>,
    #[serde(default)]
    pub members: Option<i32>,
    #[serde(default)]
    pub member_list: Option<Vec<ClanMember>>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<ClanRole>,
    #[serde(default)]
    pub town_hall_level: Option<i32>,
    #[serde(default)]
    pub exp_level: Option<i32>,
    #[serde(default)]
    pub league: Option<League>,
    #[serde(default)]
    pub builder_base_league: Option<BuilderBaseLeague>,
    #[serde(default)]
    pub trophies: Option<i32>,
    #[serde(default)]
    pub builder_base_trophies: Option<i32>,
    #[serde(default)]
    pub clan_rank: Option<i32>,
    #[serde(default)]
    pub previous_clan_rank: Option<i32>,
    #[serde(default)]
    pub donations: Option<i32>,
    #[serde(default)]
    pub donations_received: Option<i32>,
}

/// Filters for clan search; at least one must be set upstream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClanSearch {
    pub name: Option<String>,
    pub war_frequency: Option<WarFrequency>,
    pub location_id: Option<i64>,
    pub min_members: Option<u32>,
    pub max_members: Option<u32>,
    pub min_clan_points: Option<u32>,
    pub min_clan_level: Option<u32>,
    pub label_ids: Vec<i64>,
}

impl ClanSearch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub(crate) fn label_ids_param(&self) -> Option<String> {
        if self.label_ids.is_empty() {
            return None;
        }
        Some(
            self.label_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
