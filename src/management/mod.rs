mod prefs;
mod session;

pub use prefs::Preferences;
pub use session::SessionManager;
