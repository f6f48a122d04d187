use crate::{error, info, management::SessionManager, success};

/// Forgets the stored Last.fm session.
///
/// Persists a default-empty session, which is the idiomatic way to log out:
/// the next `status` or API call sees an invalid session and prompts
/// re-authorization.
pub async fn logout() {
    let mut manager = SessionManager::open().await;

    if !manager.load().is_valid() {
        info!("No session stored, nothing to do.");
        return;
    }

    if let Err(e) = manager.clear().await {
        error!("Failed to clear session: {}", e);
    }

    success!("Session cleared. Run `scroblcli auth` to link again.");
}
