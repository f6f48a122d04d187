use std::collections::BTreeMap;

use scroblcli::config::ApiCredentials;
use scroblcli::lastfm::{LastFm, sign::signed_url};

fn test_creds() -> ApiCredentials {
    ApiCredentials {
        api_key: "key123".to_string(),
        api_secret: "secret456".to_string(),
        api_url: "http://localhost/api".to_string(),
        auth_url: "http://localhost/auth/".to_string(),
    }
}

fn extract_sig(url: &str) -> &str {
    url.split("api_sig=").nth(1).expect("url carries an api_sig")
}

#[test]
fn test_signed_url_is_deterministic() {
    let creds = test_creds();
    let params = BTreeMap::from([
        ("token".to_string(), "abc123".to_string()),
        ("extra".to_string(), "value".to_string()),
    ]);

    let first = signed_url(&creds, "auth.getSession", params.clone());
    let second = signed_url(&creds, "auth.getSession", params);

    // Identical input map and method must produce an identical URL and sig
    assert_eq!(first, second);
}

#[test]
fn test_api_sig_is_32_lowercase_hex_chars() {
    let creds = test_creds();

    let with_params = signed_url(
        &creds,
        "auth.getSession",
        BTreeMap::from([("token".to_string(), "abc123".to_string())]),
    );
    let without_params = signed_url(&creds, "auth.getToken", BTreeMap::new());

    for url in [with_params, without_params] {
        let sig = extract_sig(&url);
        assert_eq!(sig.len(), 32);
        assert!(
            sig.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }
}

#[test]
fn test_empty_param_map_still_yields_well_formed_url() {
    let creds = test_creds();
    let url = signed_url(&creds, "auth.getToken", BTreeMap::new());

    // method and api_key are injected even with no extra parameters
    assert!(url.starts_with("http://localhost/api?"));
    assert!(url.contains("method=auth.getToken"));
    assert!(url.contains("api_key=key123"));
    assert!(url.contains("&format=json&api_sig="));
}

#[test]
fn test_parameters_appear_in_alphabetical_key_order() {
    let creds = test_creds();
    let url = signed_url(
        &creds,
        "auth.getSession",
        BTreeMap::from([("token".to_string(), "abc123".to_string())]),
    );

    let api_key_pos = url.find("api_key=").unwrap();
    let method_pos = url.find("method=").unwrap();
    let token_pos = url.find("token=abc123").unwrap();

    assert!(api_key_pos < method_pos);
    assert!(method_pos < token_pos);
}

#[test]
fn test_signature_depends_on_secret_and_parameters() {
    let creds = test_creds();
    let mut other_secret = test_creds();
    other_secret.api_secret = "another-secret".to_string();

    let base = signed_url(&creds, "auth.getToken", BTreeMap::new());
    let different_secret = signed_url(&other_secret, "auth.getToken", BTreeMap::new());
    let different_params = signed_url(
        &creds,
        "auth.getToken",
        BTreeMap::from([("token".to_string(), "t".to_string())]),
    );

    assert_ne!(extract_sig(&base), extract_sig(&different_secret));
    assert_ne!(extract_sig(&base), extract_sig(&different_params));
}

#[test]
fn test_secret_never_appears_in_url() {
    let creds = test_creds();
    let url = signed_url(
        &creds,
        "auth.getSession",
        BTreeMap::from([("token".to_string(), "abc123".to_string())]),
    );

    assert!(!url.contains("secret456"));
}

#[test]
fn test_create_link_url_is_plain_concatenation() {
    let client = LastFm::new(test_creds());

    assert_eq!(
        client.create_link_url("tok"),
        "http://localhost/auth/?api_key=key123&token=tok"
    );
}
