use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info, lastfm::LastFm, management::SessionManager, success, types::Session, warning,
};

/// How long the user gets to approve the token in the browser.
const AUTH_WAIT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Runs the complete Last.fm account link flow.
///
/// 1. Requests a link token (`auth.getToken`)
/// 2. Opens the account authorization page in the default browser
/// 3. Polls `auth.getSession` until the user has approved the token
/// 4. Persists the obtained session for future use
///
/// Browser launch failures produce a warning with manual URL instructions;
/// a missing token, persistence failures and authorization timeouts
/// terminate the program with an error message.
pub async fn auth() {
    let client = LastFm::from_env();

    info!("Requesting link token from Last.fm...");
    let token = client.create_account_link_token().await;
    if token.is_empty() {
        error!("Last.fm did not issue a link token. Check your API credentials and connection.");
    }

    let link_url = client.create_link_url(&token);
    if webbrowser::open(&link_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            link_url
        )
    }

    match wait_for_session(&client, &token).await {
        Some(session) => {
            let mut manager = SessionManager::open().await;
            if let Err(e) = manager.save(&session).await {
                error!("Failed to store session: {}", e);
            }

            success!("Account linked as {}.", session.username);
        }
        None => {
            error!("Authorization timed out or was denied.");
        }
    }
}

/// Polls the session exchange until the user has authorized the token.
///
/// Last.fm answers `auth.getSession` with an error payload until the token
/// has been approved on the web page, so each poll that comes back invalid
/// just means "not yet". Gives up after [`AUTH_WAIT`].
async fn wait_for_session(client: &LastFm, token: &str) -> Option<Session> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let start = Instant::now();

    while start.elapsed() < AUTH_WAIT {
        tokio::time::sleep(POLL_INTERVAL).await;

        let session = client.create_session(token).await;
        if session.is_valid() {
            pb.finish_and_clear();
            return Some(session);
        }
    }

    pb.finish_and_clear();
    None
}
