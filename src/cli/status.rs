use tabled::Table;

use crate::{management::SessionManager, types::SessionTableRow, warning};

/// Displays the stored Last.fm session.
///
/// Prints a small field/value table with the username, a masked session
/// key, the link timestamp and the derived validity. An invalid (or absent)
/// session produces a hint to run `scroblcli auth` instead.
pub async fn status() {
    let manager = SessionManager::open().await;
    let session = manager.load();

    if !session.is_valid() {
        warning!("No valid session stored. Run `scroblcli auth` to link your account.");
        return;
    }

    let rows = vec![
        SessionTableRow {
            field: "username".to_string(),
            value: session.username.clone(),
        },
        SessionTableRow {
            field: "session key".to_string(),
            value: mask(&session.session_id),
        },
        SessionTableRow {
            field: "linked at".to_string(),
            value: manager.linked_at(),
        },
        SessionTableRow {
            field: "valid".to_string(),
            value: session.is_valid().to_string(),
        },
    ];

    let table = Table::new(rows);
    println!("{}", table);
}

/// Keeps the first four characters of a credential visible.
fn mask(value: &str) -> String {
    if value.len() <= 4 {
        "*".repeat(value.len())
    } else {
        format!("{}{}", &value[..4], "*".repeat(value.len() - 4))
    }
}
