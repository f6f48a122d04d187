use std::path::PathBuf;

use chrono::Utc;

use crate::{management::Preferences, types::Session};

const COMPONENT_SETTINGS: &str = "settings";

const KEY_TOKEN: &str = "lastfm.token";
const KEY_SESSION_ID: &str = "lastfm.session_id";
const KEY_USERNAME: &str = "lastfm.username";
const KEY_LINKED_AT: &str = "lastfm.linked_at";

/// Persists the Last.fm [`Session`] in the `settings` preference component.
///
/// The preference store is the single source of durable truth; sessions
/// handed out by [`SessionManager::load`] are transient copies. Validity is
/// never stored, only the three credential strings.
pub struct SessionManager {
    prefs: Preferences,
}

impl SessionManager {
    pub async fn open() -> Self {
        SessionManager {
            prefs: Preferences::for_component(COMPONENT_SETTINGS).await,
        }
    }

    pub async fn open_in(root: PathBuf) -> Self {
        SessionManager {
            prefs: Preferences::for_component_in(root, COMPONENT_SETTINGS).await,
        }
    }

    /// Reads the stored session. Missing keys come back as empty strings,
    /// which makes the session invalid; loading never fails.
    pub fn load(&self) -> Session {
        Session {
            token: self.prefs.get_string(KEY_TOKEN),
            session_id: self.prefs.get_string(KEY_SESSION_ID),
            username: self.prefs.get_string(KEY_USERNAME),
        }
    }

    /// Writes the three credential strings. A valid session also records the
    /// link timestamp for display; saving an invalid one clears it.
    pub async fn save(&mut self, session: &Session) -> Result<(), String> {
        self.prefs.set_string(KEY_TOKEN, &session.token);
        self.prefs.set_string(KEY_SESSION_ID, &session.session_id);
        self.prefs.set_string(KEY_USERNAME, &session.username);

        let linked_at = if session.is_valid() {
            Utc::now().to_rfc3339()
        } else {
            String::new()
        };
        self.prefs.set_string(KEY_LINKED_AT, &linked_at);

        self.prefs.save().await
    }

    /// Forgets the stored credentials by persisting a default-empty session.
    pub async fn clear(&mut self) -> Result<(), String> {
        self.save(&Session::default()).await
    }

    pub fn linked_at(&self) -> String {
        self.prefs.get_string(KEY_LINKED_AT)
    }
}
