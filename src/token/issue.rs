//! Token issuing: builds claims and signs them with HMAC-SHA256.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::config::TokenConfig;
use crate::error::{Error, Result};
use crate::token::claims::{AccessClaims, RefreshClaims, TokenKind};

pub fn issue_access_token(
    config: &TokenConfig,
    id: &str,
    email: &str,
    name: &str,
    photo: &str,
) -> Result<String> {
    let claims = AccessClaims::new(
        id.to_owned(),
        email.to_owned(),
        name.to_owned(),
        photo.to_owned(),
        config.ttl_seconds(TokenKind::Access),
    );
    let token = sign(&claims, config.secret(TokenKind::Access)?)?;
    tracing::debug!(id = %claims.id, exp = claims.exp, "access token issued");
    Ok(token)
}

pub fn issue_refresh_token(config: &TokenConfig, email: &str) -> Result<String> {
    let claims = RefreshClaims::new(email.to_owned(), config.ttl_seconds(TokenKind::Refresh));
    let token = sign(&claims, config.secret(TokenKind::Refresh)?)?;
    tracing::debug!(exp = claims.exp, "refresh token issued");
    Ok(token)
}

// Header::default() is HS256, the one algorithm both kinds use.
fn sign<T: Serialize>(claims: &T, secret: &[u8]) -> Result<String> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| Error::Signing(e.to_string()))
}
