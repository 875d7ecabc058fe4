//! Integration tests for credential-based client construction

mod common;

use clash_api::{ApiError, ClashClient, Credentials, TokenError, TokenManager};
use common::{portal_key, ScriptedHttp, API, IP_LOOKUP, PORTAL};

fn credentials() -> Credentials {
    Credentials::new("dev@example.com", "hunter2")
        .key_name("runner")
        .portal_url(PORTAL)
        .ip_lookup_url(IP_LOOKUP)
}

fn portal(ip: &str) -> ScriptedHttp {
    ScriptedHttp::new()
        .route(IP_LOOKUP, 200, ip)
        .route(&format!("{}/login", PORTAL), 200, "{}")
}

#[tokio::test]
async fn rotated_key_is_used_by_client() {
    common::init_tracing();
    let portal = portal("203.0.113.7")
        .route(
            &format!("{}/apikey/list", PORTAL),
            200,
            serde_json::json!({ "keys": [portal_key("old", "runner", &["198.51.100.1"], "stale")] })
                .to_string(),
        )
        .route(&format!("{}/apikey/revoke", PORTAL), 200, "{}")
        .route(
            &format!("{}/apikey/create", PORTAL),
            200,
            serde_json::json!({
                "key": portal_key("new", "runner", &["198.51.100.1", "203.0.113.7"], "fresh")
            })
            .to_string(),
        );
    let api = ScriptedHttp::new().route(
        &format!("{}/goldpass/seasons/current", API),
        200,
        r#"{"startTime":"20240301T080000.000Z","endTime":"20240401T080000.000Z"}"#,
    );

    let client = ClashClient::login_with(&credentials(), portal.clone(), api)
        .await
        .unwrap();
    client.get_current_gold_pass_season().await.unwrap();

    let calls = portal.calls();
    let revoke = calls.iter().position(|u| u.ends_with("/apikey/revoke")).unwrap();
    let create = calls.iter().position(|u| u.ends_with("/apikey/create")).unwrap();
    assert!(revoke < create);

    let body = portal.body_of(&format!("{}/apikey/create", PORTAL)).unwrap();
    assert_eq!(
        body["cidrRanges"],
        serde_json::json!(["198.51.100.1", "203.0.113.7"])
    );
}

#[tokio::test]
async fn key_inside_cidr_block_is_reused() {
    let portal = portal("10.1.2.3").route(
        &format!("{}/apikey/list", PORTAL),
        200,
        serde_json::json!({ "keys": [portal_key("k", "someone-else", &["10.0.0.0/8"], "block")] })
            .to_string(),
    );

    let token = TokenManager::with_http_client(credentials(), portal.clone())
        .token()
        .await
        .unwrap();

    assert_eq!(token, "block");
    assert!(!portal.calls().iter().any(|u| u.contains("/apikey/create")));
}

#[tokio::test]
async fn wrong_password_stops_after_login() {
    let portal = ScriptedHttp::new()
        .route(IP_LOOKUP, 200, "203.0.113.7")
        .route(&format!("{}/login", PORTAL), 403, r#"{"error":"invalid"}"#);

    let result = TokenManager::with_http_client(credentials(), portal.clone())
        .token()
        .await;

    assert!(matches!(result, Err(TokenError::Login(_))));
    assert_eq!(portal.calls().len(), 2);
}

#[tokio::test]
async fn unreachable_portal_surfaces_immediately() {
    let portal = ScriptedHttp::new().route(IP_LOOKUP, 200, "203.0.113.7");

    let result = TokenManager::with_http_client(credentials(), portal.clone())
        .token()
        .await;

    assert!(matches!(result, Err(TokenError::Login(_))));
    assert_eq!(portal.calls().len(), 2);
}

#[tokio::test]
async fn client_errors_reach_caller_unchanged() {
    let api = ScriptedHttp::new().route(
        &format!("{}/players/%23P1", API),
        429,
        r#"{"reason":"requestThrottled","message":"Request was throttled"}"#,
    );
    let client = ClashClient::with_http_client("token", api);

    match client.get_player("#P1").await {
        Err(ApiError::TooManyRequests { message, body }) => {
            assert_eq!(message, "Request was throttled");
            assert_eq!(body.unwrap().reason.as_deref(), Some("requestThrottled"));
        }
        other => panic!("expected TooManyRequests, got {:?}", other.map(|p| p.tag)),
    }
}
