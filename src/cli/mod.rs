//! # CLI Module
//!
//! This module provides the command-line interface layer for scroblcli. It
//! implements the user-facing commands and coordinates between the Last.fm
//! API client, the durable preference store, and user interaction.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the account link flow: requests a link token, opens the
//!   Last.fm authorization page in the browser, polls for the session
//!   exchange to succeed, and stores the resulting session.
//!
//! ### Session Inspection
//!
//! - [`status`] - Displays the stored session (username, masked session key,
//!   link timestamp) and whether it is valid.
//!
//! ### Logout
//!
//! - [`logout`] - Clears the stored session, forgetting all credentials.
//!
//! ## Error Presentation
//!
//! Commands report progress with the `info!`/`success!`/`warning!` macros
//! and terminate through `error!` on unrecoverable failures. Remote-call
//! failures during the link flow degrade to "not linked" rather than
//! aborting the poll loop, matching the API client's best-effort contract.

mod auth;
mod logout;
mod status;

pub use auth::auth;
pub use logout::logout;
pub use status::status;
