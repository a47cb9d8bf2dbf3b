//! SessionMint: signed session tokens for user authentication.
//!
//! Two token kinds share one HMAC-SHA256 signing scheme: short-lived
//! access tokens carrying the user's identity claims, and long-lived
//! refresh tokens carrying only the email. Each kind is signed with its
//! own secret from [`TokenConfig`].

pub mod config;
pub mod error;
pub mod token;

pub use config::TokenConfig;
pub use error::{Error, Result};
pub use token::claims::{AccessClaims, RefreshClaims, TokenKind, VerifiedClaims};
pub use token::issue::{issue_access_token, issue_refresh_token};
pub use token::verify::{verify_access_token, verify_refresh_token, verify_token};
