use serde::{Deserialize, Serialize};

use super::{IconUrls, League, Location, PlayerClan};

/// Entry of a clan ranking
///
/// The points field populated depends on the ranking requested: home
/// village, builder base or clan capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanRanking {
    pub tag: String,
    pub name: String,
    pub rank: i32,
    #[serde(default)]
    pub previous_rank: Option<i32>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub badge_urls: Option<IconUrls>,
    #[serde(default)]
    pub clan_level: Option<i32>,
    #[serde(default)]
    pub members: Option<i32>,
    #[serde(default)]
    pub clan_points: Option<i32>,
    #[serde(default)]
    pub clan_builder_base_points: Option<i32>,
    #[serde(default)]
    pub clan_capital_points: Option<i32>,
}

/// Entry of a player ranking, home village or builder base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub tag: String,
    pub name: String,
    pub rank: i32,
    #[serde(default)]
    pub previous_rank: Option<i32>,
    #[serde(default)]
    pub exp_level: Option<i32>,
    #[serde(default)]
    pub trophies: Option<i32>,
    #[serde(default)]
    pub builder_base_trophies: Option<i32>,
    #[serde(default)]
    pub attack_wins: Option<i32>,
    #[serde(default)]
    pub defense_wins: Option<i32>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    #[serde(default)]
    pub league: Option<League>,
}

impl PlayerRanking {
    /// Positive when the player climbed since the previous ranking
    pub fn rank_change(&self) -> Option<i32> {
        self.previous_rank
            .filter(|previous| *previous > 0)
            .map(|previous| previous - self.rank)
    }
}
