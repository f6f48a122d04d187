//! Configuration management for the Last.fm scrobble-session CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration, most importantly the Last.fm API
//! credentials and endpoints bundled into an [`ApiCredentials`] value.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoints only, never credentials)

use std::env;

use dotenv;

use crate::utils;

const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";
const DEFAULT_AUTH_URL: &str = "https://www.last.fm/api/auth/";

/// Immutable Last.fm API configuration handed to the client at construction.
///
/// Bundles the application key/secret with the endpoints they sign requests
/// for. Constructing the client from a value rather than reading globals
/// keeps the client testable with substitute credentials and a local mock
/// endpoint.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// Application key sent as `api_key` on every request.
    pub api_key: String,
    /// Shared secret appended to the signature hash input. Never sent.
    pub api_secret: String,
    /// Base endpoint for signed API calls, e.g. `https://ws.audioscrobbler.com/2.0/`.
    pub api_url: String,
    /// Web page a user visits to authorize a link token.
    pub auth_url: String,
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `scroblcli/.env`. This allows users to store
/// the API credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/scroblcli/.env`
/// - macOS: `~/Library/Application Support/scroblcli/.env`
/// - Windows: `%LOCALAPPDATA%/scroblcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use scroblcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = utils::data_directory(false);
    path.push(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| format!("Failed to load .env file: {}", e))?;
    Ok(())
}

/// Returns the Last.fm API key for request signing.
///
/// Retrieves the `LASTFM_API_KEY` environment variable which contains the
/// application key obtained when registering an API account with Last.fm.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm shared secret for request signing.
///
/// Retrieves the `LASTFM_API_SECRET` environment variable which contains the
/// shared secret paired with the API key. It is appended to the signature
/// hash input and must never appear in a request URL.
///
/// # Panics
///
/// Panics if the `LASTFM_API_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The shared secret should be kept confidential and never exposed in logs
/// or version control.
pub fn lastfm_api_secret() -> String {
    env::var("LASTFM_API_SECRET").expect("LASTFM_API_SECRET must be set")
}

/// Returns the base URL for signed Last.fm Web API calls.
///
/// Reads the `LASTFM_API_URL` environment variable, falling back to the
/// public `ws.audioscrobbler.com` endpoint when unset. Overriding this is
/// only useful for pointing the client at a test server.
pub fn lastfm_api_url() -> String {
    env::var("LASTFM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the base URL of the Last.fm account authorization page.
///
/// Reads the `LASTFM_AUTH_URL` environment variable, falling back to the
/// public `last.fm/api/auth` page when unset. This is the page a human must
/// visit to authorize a link token.
pub fn lastfm_auth_url() -> String {
    env::var("LASTFM_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Builds the [`ApiCredentials`] value from the environment.
///
/// # Panics
///
/// Panics if `LASTFM_API_KEY` or `LASTFM_API_SECRET` is not set; the
/// endpoint variables fall back to the public Last.fm URLs.
pub fn api_credentials() -> ApiCredentials {
    ApiCredentials {
        api_key: lastfm_api_key(),
        api_secret: lastfm_api_secret(),
        api_url: lastfm_api_url(),
        auth_url: lastfm_auth_url(),
    }
}
