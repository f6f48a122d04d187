//! # Last.fm Integration Module
//!
//! This module implements the client side of the Last.fm authentication
//! ("account link") flow. It is the integration layer between scroblcli and
//! the Last.fm Web API, covering request signing and the two API methods the
//! flow needs.
//!
//! ## Flow
//!
//! 1. **Link token**: `auth.getToken` issues a short-lived token
//!    ([`LastFm::create_account_link_token`]).
//! 2. **User authorization**: the user visits the account link page
//!    ([`LastFm::create_link_url`]) and approves the token in the browser.
//! 3. **Session exchange**: `auth.getSession` trades the approved token for
//!    a durable session key and username ([`LastFm::create_session`]).
//!
//! ## Request signing
//!
//! Every API call carries an `api_sig` parameter: the MD5 digest of the
//! alphabetically ordered `key||value` concatenation of all parameters plus
//! the shared secret. [`sign::signed_url`] builds complete signed URLs and
//! is a pure function, so signing is testable without any network.
//!
//! ## Error handling
//!
//! Each API method exists in two layers. The strict layer
//! ([`LastFm::get_token`], [`LastFm::get_session`]) returns
//! `Result<_, ApiFailure>` and distinguishes transport failures, unexpected
//! HTTP statuses and malformed bodies. The degrading wrappers preserve the
//! historical contract of the flow: they never fail, producing an empty
//! token or an invalid [`Session`](crate::types::Session) instead, which the
//! caller detects via emptiness / `is_valid()`.

pub mod auth;
pub mod sign;

pub use auth::LastFm;
