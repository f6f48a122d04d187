use std::collections::BTreeMap;

use md5::{Digest, Md5};

use crate::config::ApiCredentials;

/// Builds a fully-qualified, signed Last.fm API request URL.
///
/// Injects the fixed `method` and `api_key` parameters into the given map,
/// then walks the entries in alphabetical key order twice with the same
/// iteration: once to assemble the signature hash input (`key` immediately
/// followed by `value` for every entry, then the shared secret), once to
/// assemble the query string. Last.fm requires the signature to be computed
/// over the alphabetically ordered parameters, which the `BTreeMap` gives
/// for free.
///
/// The `api_sig` is the MD5 digest of the hash input rendered as 32
/// lowercase hex characters, appended after a fixed `format=json` parameter.
/// Neither of those two trailing parameters takes part in the signature.
///
/// # Arguments
///
/// * `creds` - API key/secret and base endpoint to sign for
/// * `method` - Remote method name, e.g. `auth.getToken`
/// * `params` - Method-specific parameters; may be empty
///
/// # Returns
///
/// A complete URL ready for an HTTP GET. Deterministic for identical inputs;
/// no I/O, no side effects.
///
/// # Example
///
/// ```
/// let url = signed_url(&creds, "auth.getSession", BTreeMap::from([
///     ("token".to_string(), "abc123".to_string()),
/// ]));
/// ```
pub fn signed_url(
    creds: &ApiCredentials,
    method: &str,
    mut params: BTreeMap<String, String>,
) -> String {
    params.insert("method".to_string(), method.to_string());
    params.insert("api_key".to_string(), creds.api_key.clone());

    let mut to_hash = String::new();
    let mut url = creds.api_url.clone();
    let mut first = true;

    for (key, value) in &params {
        to_hash.push_str(key);
        to_hash.push_str(value);
        url.push(if first { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
        first = false;
    }

    to_hash.push_str(&creds.api_secret);

    let digest = Md5::digest(to_hash.as_bytes());

    url.push_str("&format=json&api_sig=");
    url.push_str(&hex::encode(digest));

    url
}
