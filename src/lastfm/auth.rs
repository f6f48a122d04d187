use std::collections::BTreeMap;

use reqwest::{Client, StatusCode};

use crate::{
    config::{self, ApiCredentials},
    lastfm::sign,
    types::{ApiFailure, Session, SessionBody, SessionResponse, TokenResponse},
};

const GET_TOKEN: &str = "auth.getToken";
const GET_SESSION: &str = "auth.getSession";

/// Client for the Last.fm authentication API.
///
/// Owns the HTTP client and the [`ApiCredentials`] used to sign every
/// request. All remote calls are plain GETs against signed URLs; see
/// [`sign::signed_url`] for the signing scheme.
pub struct LastFm {
    creds: ApiCredentials,
    http: Client,
}

impl LastFm {
    pub fn new(creds: ApiCredentials) -> Self {
        LastFm {
            creds,
            http: Client::new(),
        }
    }

    /// Builds a client from the `LASTFM_*` environment configuration.
    ///
    /// # Panics
    ///
    /// Panics if `LASTFM_API_KEY` or `LASTFM_API_SECRET` is not set.
    pub fn from_env() -> Self {
        Self::new(config::api_credentials())
    }

    /// Requests a fresh account link token via `auth.getToken`.
    ///
    /// This is the strict layer: any transport failure, non-200 status or
    /// malformed body is reported as an [`ApiFailure`]. A 200 response whose
    /// JSON merely lacks the `token` field yields an empty token, not an
    /// error.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` - The link token the user must authorize
    /// - `Err(ApiFailure)` - Why no token could be extracted
    pub async fn get_token(&self) -> Result<String, ApiFailure> {
        let url = sign::signed_url(&self.creds, GET_TOKEN, BTreeMap::new());
        let body = self.fetch(&url).await?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| ApiFailure::Parse(e.to_string()))?;
        Ok(parsed.token)
    }

    /// Requests a link token, degrading every failure to an empty string.
    ///
    /// Wrapper over [`LastFm::get_token`] preserving the flow's historical
    /// contract: it never fails. Callers are expected to check for emptiness
    /// and re-prompt authorization.
    pub async fn create_account_link_token(&self) -> String {
        self.get_token().await.unwrap_or_default()
    }

    /// Builds the web page URL a user must visit to authorize a link token.
    ///
    /// Pure concatenation of the authorization page, the API key and the
    /// token. No signing, no I/O.
    pub fn create_link_url(&self, token: &str) -> String {
        format!(
            "{}?api_key={}&token={}",
            self.creds.auth_url, self.creds.api_key, token
        )
    }

    /// Exchanges an authorized link token for session credentials via
    /// `auth.getSession`.
    ///
    /// Strict layer: returns the nested `session` object (`name` and `key`,
    /// each defaulting to empty when absent) or an [`ApiFailure`] describing
    /// why the exchange produced no data. Last.fm keeps answering with an
    /// error payload until the user has approved the token in the browser,
    /// which surfaces here as `Parse` (the body carries no `session`
    /// object).
    pub async fn get_session(&self, token: &str) -> Result<SessionBody, ApiFailure> {
        let params = BTreeMap::from([("token".to_string(), token.to_string())]);
        let url = sign::signed_url(&self.creds, GET_SESSION, params);
        let body = self.fetch(&url).await?;
        let parsed: SessionResponse =
            serde_json::from_str(&body).map_err(|e| ApiFailure::Parse(e.to_string()))?;
        Ok(parsed.session)
    }

    /// Exchanges a link token for a [`Session`], degrading every failure to
    /// an invalid session.
    ///
    /// The returned session always carries the input token; username and
    /// session id stay empty unless the exchange succeeded, so
    /// [`Session::is_valid`] is the single signal callers need to inspect.
    pub async fn create_session(&self, token: &str) -> Session {
        let mut session = Session {
            token: token.to_string(),
            ..Session::default()
        };

        if let Ok(body) = self.get_session(token).await {
            session.username = body.name;
            session.session_id = body.key;
        }

        session
    }

    async fn fetch(&self, url: &str) -> Result<String, ApiFailure> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiFailure::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))
    }
}
