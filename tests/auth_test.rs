use std::collections::HashMap;

use axum::{Router, extract::Query, http::StatusCode, routing::get};

use scroblcli::config::ApiCredentials;
use scroblcli::lastfm::LastFm;
use scroblcli::types::ApiFailure;

/// Serves the router on an ephemeral local port and returns the endpoint
/// URL the client should sign requests for.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn client_for(app: Router) -> LastFm {
    LastFm::new(ApiCredentials {
        api_key: "key123".to_string(),
        api_secret: "secret456".to_string(),
        api_url: serve(app).await,
        auth_url: "http://localhost/auth/".to_string(),
    })
}

#[tokio::test]
async fn test_link_token_is_extracted_from_200_response() {
    let app = Router::new().route("/api", get(|| async { r#"{"token":"abc123"}"# }));
    let client = client_for(app).await;

    assert_eq!(client.create_account_link_token().await, "abc123");
}

#[tokio::test]
async fn test_link_token_request_carries_signed_parameters() {
    // Echo a token only when the request looks like a properly signed
    // auth.getToken call, so the assertion runs in the test, not the server.
    let app = Router::new().route(
        "/api",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let sig_ok = params
                .get("api_sig")
                .map(|s| s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit()))
                .unwrap_or(false);

            if params.get("method").map(String::as_str) == Some("auth.getToken")
                && params.get("api_key").map(String::as_str) == Some("key123")
                && params.get("format").map(String::as_str) == Some("json")
                && sig_ok
            {
                r#"{"token":"signed"}"#
            } else {
                r#"{"token":""}"#
            }
        }),
    );
    let client = client_for(app).await;

    assert_eq!(client.create_account_link_token().await, "signed");
}

#[tokio::test]
async fn test_link_token_degrades_to_empty_on_non_200() {
    let app = Router::new().route("/api", get(|| async { (StatusCode::NOT_FOUND, "") }));
    let client = client_for(app).await;

    assert_eq!(client.create_account_link_token().await, "");
    assert_eq!(client.get_token().await, Err(ApiFailure::Status(404)));
}

#[tokio::test]
async fn test_link_token_degrades_to_empty_on_malformed_body() {
    let app = Router::new().route("/api", get(|| async { "certainly not json" }));
    let client = client_for(app).await;

    assert_eq!(client.create_account_link_token().await, "");
    assert!(matches!(
        client.get_token().await,
        Err(ApiFailure::Parse(_))
    ));
}

#[tokio::test]
async fn test_link_token_missing_field_defaults_to_empty() {
    // A 200 body without a token field is not an error, just no data
    let app = Router::new().route("/api", get(|| async { "{}" }));
    let client = client_for(app).await;

    assert_eq!(client.get_token().await, Ok(String::new()));
    assert_eq!(client.create_account_link_token().await, "");
}

#[tokio::test]
async fn test_session_is_populated_from_200_response() {
    let app = Router::new().route(
        "/api",
        get(|| async { r#"{"session":{"name":"alice","key":"sess999"}}"# }),
    );
    let client = client_for(app).await;

    let session = client.create_session("abc123").await;
    assert_eq!(session.token, "abc123");
    assert_eq!(session.username, "alice");
    assert_eq!(session.session_id, "sess999");
    assert!(session.is_valid());
}

#[tokio::test]
async fn test_session_keeps_token_but_is_invalid_on_non_200() {
    let app = Router::new().route("/api", get(|| async { (StatusCode::NOT_FOUND, "") }));
    let client = client_for(app).await;

    let session = client.create_session("abc123").await;
    assert_eq!(session.token, "abc123");
    assert_eq!(session.username, "");
    assert_eq!(session.session_id, "");
    assert!(!session.is_valid());
}

#[tokio::test]
async fn test_session_keeps_token_but_is_invalid_on_malformed_body() {
    let app = Router::new().route("/api", get(|| async { "<html>oops</html>" }));
    let client = client_for(app).await;

    let session = client.create_session("abc123").await;
    assert_eq!(session.token, "abc123");
    assert!(!session.is_valid());
}

#[tokio::test]
async fn test_session_missing_fields_default_to_empty() {
    let app = Router::new().route("/api", get(|| async { r#"{"session":{"name":"alice"}}"# }));
    let client = client_for(app).await;

    let session = client.create_session("abc123").await;
    assert_eq!(session.username, "alice");
    assert_eq!(session.session_id, "");
    assert!(!session.is_valid());
}

#[tokio::test]
async fn test_strict_layer_distinguishes_status_from_parse() {
    let not_found = client_for(Router::new().route("/api", get(|| async { (StatusCode::NOT_FOUND, "") }))).await;
    let malformed = client_for(Router::new().route("/api", get(|| async { "nope" }))).await;

    assert_eq!(
        not_found.get_session("abc123").await,
        Err(ApiFailure::Status(404))
    );
    assert!(matches!(
        malformed.get_session("abc123").await,
        Err(ApiFailure::Parse(_))
    ));
}
