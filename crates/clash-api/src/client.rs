use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenManager;
use crate::config::{ClientConfig, Credentials};
use crate::error::{ApiError, TokenError};
use crate::http::{HttpClient, HttpRequest, ReqwestClient};
use crate::models::*;
use crate::paths::{tag_segment, PageParams, Query};
use crate::response::{classify, decode};

#[derive(Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

/// Clash of Clans API client
///
/// Holds an immutable bearer token; a new token means a new client. Every
/// method is a single request with no caching or retries, so one client can
/// be shared across tasks.
pub struct ClashClient<H: HttpClient = ReqwestClient> {
    http: H,
    base_url: String,
    token: String,
}

impl ClashClient<ReqwestClient> {
    /// Creates a client for an existing API key secret
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_http_client(token, ReqwestClient::new())
    }

    /// Creates a client using the given configuration
    pub fn with_config(token: impl Into<String>, config: &ClientConfig) -> Self {
        Self::with_http_client_and_config(token, ReqwestClient::new(), config)
    }

    /// Logs in to the developer portal, obtains a key for this machine's IP
    /// and returns a client using it
    pub async fn login(credentials: &Credentials) -> Result<Self, TokenError> {
        let token = TokenManager::new(credentials.clone())?.token().await?;
        Ok(Self::new(token))
    }
}

impl<H: HttpClient> ClashClient<H> {
    /// Creates a client with a custom HTTP implementation
    pub fn with_http_client(token: impl Into<String>, http: H) -> Self {
        Self {
            http,
            base_url: ClientConfig::default().base_url,
            token: token.into(),
        }
    }

    /// Creates a client with a custom HTTP implementation and configuration
    pub fn with_http_client_and_config(
        token: impl Into<String>,
        http: H,
        config: &ClientConfig,
    ) -> Self {
        Self::with_http_client(token, http).with_base_url(&config.base_url)
    }

    /// Credential-based construction over custom transports
    ///
    /// `portal` talks to the developer portal and must keep cookies; `http`
    /// becomes the client's transport.
    pub async fn login_with<P: HttpClient>(
        credentials: &Credentials,
        portal: P,
        http: H,
    ) -> Result<Self, TokenError> {
        let token = TokenManager::with_http_client(credentials.clone(), portal)
            .token()
            .await?;
        Ok(Self::with_http_client(token, http))
    }

    /// Overrides the API base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| ApiError::Request(format!("Invalid token: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send<T: DeserializeOwned>(&self, mut request: HttpRequest) -> Result<T, ApiError> {
        request.headers.extend(self.headers()?);
        tracing::debug!("{} {}", request.method, request.url);

        let response = self
            .http
            .execute(&request)
            .await
            .map_err(|e| ApiError::Request(format!("{:#}", e)))?;

        classify(response).and_then(|body| decode(&body))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.send(HttpRequest::get(url)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?;
        let url = format!("{}{}", self.base_url, endpoint);
        self.send(HttpRequest::post(url, Some(body))).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &PageParams,
    ) -> Result<Page<T>, ApiError> {
        let query = params.apply(Query::new()).build();
        self.get(&format!("{}{}", endpoint, query)).await
    }
}

impl<H: HttpClient + Clone> Clone for ClashClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: self.token.clone(),
        }
    }
}

// Clan-related methods
impl<H: HttpClient> ClashClient<H> {
    /// Searches clans by name and/or filters
    pub async fn search_clans(
        &self,
        search: &ClanSearch,
        params: &PageParams,
    ) -> Result<Page<Clan>, ApiError> {
        let query = Query::new()
            .push("name", search.name.as_deref())
            .push(
                "warFrequency",
                search.war_frequency.as_ref().map(WarFrequency::as_query),
            )
            .push("locationId", search.location_id)
            .push("minMembers", search.min_members)
            .push("maxMembers", search.max_members)
            .push("minClanPoints", search.min_clan_points)
            .push("minClanLevel", search.min_clan_level)
            .push_raw("labelIds", search.label_ids_param().as_deref());
        let query = params.apply(query).build();

        self.get(&format!("/clans{}", query)).await
    }

    pub async fn get_clan(&self, clan_tag: &str) -> Result<Clan, ApiError> {
        self.get(&format!("/clans/{}", tag_segment(clan_tag))).await
    }

    pub async fn get_clan_members(
        &self,
        clan_tag: &str,
        params: &PageParams,
    ) -> Result<Page<ClanMember>, ApiError> {
        self.get_page(&format!("/clans/{}/members", tag_segment(clan_tag)), params)
            .await
    }

    /// Returns `ApiError::Forbidden` when the clan's war log is private
    pub async fn get_clan_war_log(
        &self,
        clan_tag: &str,
        params: &PageParams,
    ) -> Result<Page<WarLogEntry>, ApiError> {
        self.get_page(&format!("/clans/{}/warlog", tag_segment(clan_tag)), params)
            .await
    }

    pub async fn get_current_war(&self, clan_tag: &str) -> Result<ClanWar, ApiError> {
        self.get(&format!("/clans/{}/currentwar", tag_segment(clan_tag)))
            .await
    }

    pub async fn get_war_league_group(&self, clan_tag: &str) -> Result<WarLeagueGroup, ApiError> {
        self.get(&format!(
            "/clans/{}/currentwar/leaguegroup",
            tag_segment(clan_tag)
        ))
        .await
    }

    /// Fetches one clan war league war by the tag listed in its round
    pub async fn get_war_league_war(&self, war_tag: &str) -> Result<ClanWar, ApiError> {
        self.get(&format!("/clanwarleagues/wars/{}", tag_segment(war_tag)))
            .await
    }

    pub async fn get_capital_raid_seasons(
        &self,
        clan_tag: &str,
        params: &PageParams,
    ) -> Result<Page<CapitalRaidSeason>, ApiError> {
        self.get_page(
            &format!("/clans/{}/capitalraidseasons", tag_segment(clan_tag)),
            params,
        )
        .await
    }
}

// Player-related methods
impl<H: HttpClient> ClashClient<H> {
    pub async fn get_player(&self, player_tag: &str) -> Result<Player, ApiError> {
        self.get(&format!("/players/{}", tag_segment(player_tag)))
            .await
    }

    /// Checks the one-time API token shown in the player's game settings
    pub async fn verify_player_token(
        &self,
        player_tag: &str,
        token: &str,
    ) -> Result<VerifyTokenResponse, ApiError> {
        self.post(
            &format!("/players/{}/verifytoken", tag_segment(player_tag)),
            &VerifyTokenRequest { token },
        )
        .await
    }
}

// League-related methods
impl<H: HttpClient> ClashClient<H> {
    pub async fn get_leagues(&self, params: &PageParams) -> Result<Page<League>, ApiError> {
        self.get_page("/leagues", params).await
    }

    pub async fn get_league(&self, league_id: i64) -> Result<League, ApiError> {
        self.get(&format!("/leagues/{}", league_id)).await
    }

    /// Only available for the legend league
    pub async fn get_league_seasons(
        &self,
        league_id: i64,
        params: &PageParams,
    ) -> Result<Page<LeagueSeason>, ApiError> {
        self.get_page(&format!("/leagues/{}/seasons", league_id), params)
            .await
    }

    pub async fn get_league_season_rankings(
        &self,
        league_id: i64,
        season_id: &str,
        params: &PageParams,
    ) -> Result<Page<PlayerRanking>, ApiError> {
        self.get_page(
            &format!(
                "/leagues/{}/seasons/{}",
                league_id,
                urlencoding::encode(season_id)
            ),
            params,
        )
        .await
    }

    pub async fn get_war_leagues(&self, params: &PageParams) -> Result<Page<WarLeague>, ApiError> {
        self.get_page("/warleagues", params).await
    }

    pub async fn get_war_league(&self, league_id: i64) -> Result<WarLeague, ApiError> {
        self.get(&format!("/warleagues/{}", league_id)).await
    }

    pub async fn get_capital_leagues(
        &self,
        params: &PageParams,
    ) -> Result<Page<CapitalLeague>, ApiError> {
        self.get_page("/capitalleagues", params).await
    }

    pub async fn get_capital_league(&self, league_id: i64) -> Result<CapitalLeague, ApiError> {
        self.get(&format!("/capitalleagues/{}", league_id)).await
    }

    pub async fn get_builder_base_leagues(
        &self,
        params: &PageParams,
    ) -> Result<Page<BuilderBaseLeague>, ApiError> {
        self.get_page("/builderbaseleagues", params).await
    }

    pub async fn get_builder_base_league(
        &self,
        league_id: i64,
    ) -> Result<BuilderBaseLeague, ApiError> {
        self.get(&format!("/builderbaseleagues/{}", league_id)).await
    }
}

// Location and ranking methods
impl<H: HttpClient> ClashClient<H> {
    pub async fn get_locations(&self, params: &PageParams) -> Result<Page<Location>, ApiError> {
        self.get_page("/locations", params).await
    }

    pub async fn get_location(&self, location_id: i64) -> Result<Location, ApiError> {
        self.get(&format!("/locations/{}", location_id)).await
    }

    /// `location_id` is a numeric location id or `global`
    pub async fn get_clan_rankings(
        &self,
        location_id: &str,
        params: &PageParams,
    ) -> Result<Page<ClanRanking>, ApiError> {
        self.get_rankings(location_id, "clans", params).await
    }

    pub async fn get_player_rankings(
        &self,
        location_id: &str,
        params: &PageParams,
    ) -> Result<Page<PlayerRanking>, ApiError> {
        self.get_rankings(location_id, "players", params).await
    }

    pub async fn get_clan_builder_base_rankings(
        &self,
        location_id: &str,
        params: &PageParams,
    ) -> Result<Page<ClanRanking>, ApiError> {
        self.get_rankings(location_id, "clans-builder-base", params)
            .await
    }

    pub async fn get_player_builder_base_rankings(
        &self,
        location_id: &str,
        params: &PageParams,
    ) -> Result<Page<PlayerRanking>, ApiError> {
        self.get_rankings(location_id, "players-builder-base", params)
            .await
    }

    pub async fn get_clan_capital_rankings(
        &self,
        location_id: &str,
        params: &PageParams,
    ) -> Result<Page<ClanRanking>, ApiError> {
        self.get_rankings(location_id, "capitals", params).await
    }

    async fn get_rankings<T: DeserializeOwned>(
        &self,
        location_id: &str,
        kind: &str,
        params: &PageParams,
    ) -> Result<Page<T>, ApiError> {
        self.get_page(
            &format!(
                "/locations/{}/rankings/{}",
                urlencoding::encode(location_id),
                kind
            ),
            params,
        )
        .await
    }
}

// Label and gold pass methods
impl<H: HttpClient> ClashClient<H> {
    pub async fn get_clan_labels(&self, params: &PageParams) -> Result<Page<Label>, ApiError> {
        self.get_page("/labels/clans", params).await
    }

    pub async fn get_player_labels(&self, params: &PageParams) -> Result<Page<Label>, ApiError> {
        self.get_page("/labels/players", params).await
    }

    pub async fn get_current_gold_pass_season(&self) -> Result<GoldPassSeason, ApiError> {
        self.get("/goldpass/seasons/current").await
    }
}
