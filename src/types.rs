use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Credentials identifying an authorized link to a Last.fm account.
///
/// A plain value type; `valid` is never stored, it is always derived from
/// the three fields via [`Session::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub session_id: String,
    pub username: String,
}

impl Session {
    /// A session is valid iff token, session id and username are all non-empty.
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && !self.session_id.is_empty() && !self.username.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: SessionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

/// Why an API call produced no usable data.
///
/// Distinguishes "remote said no" from "remote said something malformed" so
/// callers and tests can tell the cases apart; the degrading wrappers in
/// [`crate::lastfm`] collapse all of them into empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Non-200 HTTP status.
    Status(u16),
    /// Connection, TLS or timeout error before a status was available.
    Transport(String),
    /// HTTP 200 but the body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Status(code) => write!(f, "unexpected HTTP status {}", code),
            ApiFailure::Transport(e) => write!(f, "transport error: {}", e),
            ApiFailure::Parse(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl std::error::Error for ApiFailure {}

#[derive(Tabled)]
pub struct SessionTableRow {
    pub field: String,
    pub value: String,
}
