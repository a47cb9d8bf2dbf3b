//! Typed claim sets for access and refresh tokens.
//! Used by: token::issue, token::verify.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Which secret signs a token and which claims it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Identity claims embedded in an access token. Values may be empty
/// strings, but every key is always present on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    pub id: String,
    pub email: String,
    pub name: String,
    pub photo: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(id: String, email: String, name: String, photo: String, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            email,
            name,
            photo,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(email: String, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            email,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims decoded by the kind-dispatching verifier.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifiedClaims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl VerifiedClaims {
    /// The email claim, present in both kinds.
    pub fn email(&self) -> &str {
        match self {
            VerifiedClaims::Access(claims) => &claims.email,
            VerifiedClaims::Refresh(claims) => &claims.email,
        }
    }
}
