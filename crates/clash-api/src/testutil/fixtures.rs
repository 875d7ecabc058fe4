//! Test fixtures
//!
//! Wire-format JSON for common testing scenarios.

use serde_json::json;

/// A developer-portal API key
pub fn api_key_json(id: &str, name: &str, ranges: &[&str], secret: &str) -> String {
    json!({
        "id": id,
        "developerId": "dev-1",
        "tier": "developer/silver",
        "name": name,
        "description": "fixture key",
        "origins": null,
        "scopes": ["clash"],
        "cidrRanges": ranges,
        "validUntil": null,
        "key": secret,
    })
    .to_string()
}

/// A `POST /apikey/list` response body wrapping already-rendered keys
pub fn key_list_json(keys: &[String]) -> String {
    format!(r#"{{"keys":[{}]}}"#, keys.join(","))
}

/// A minimal clan record
pub fn clan_json(tag: &str, name: &str) -> String {
    json!({
        "tag": tag,
        "name": name,
        "type": "open",
        "clanLevel": 10,
        "members": 0,
        "memberList": [],
    })
    .to_string()
}

/// A minimal player record
pub fn player_json(tag: &str) -> String {
    json!({
        "tag": tag,
        "name": format!("Player {}", tag),
        "townHallLevel": 15,
        "expLevel": 200,
        "trophies": 5000,
    })
    .to_string()
}

/// A page of labels with ids from `ids` and an optional `after` cursor
pub fn label_page_json(ids: &[i64], after: Option<&str>) -> String {
    let items: Vec<_> = ids
        .iter()
        .map(|id| json!({ "id": id, "name": format!("Label {}", id) }))
        .collect();
    let mut page = json!({ "items": items });
    if let Some(after) = after {
        page["paging"] = json!({ "cursors": { "after": after } });
    }
    page.to_string()
}
