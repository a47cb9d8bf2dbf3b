//! Unified error types for token issuing and verification.
//! Used by: config, token.

use crate::token::claims::TokenKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("token is empty")]
    EmptyToken,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid token format: {0}")]
    InvalidToken(String),

    #[error("{0} secret is empty or unset")]
    MissingSecret(TokenKind),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("signing error: {0}")]
    Signing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
