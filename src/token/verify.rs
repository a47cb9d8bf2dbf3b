//! Token verification and claims decoding.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;

use crate::config::TokenConfig;
use crate::error::{Error, Result};
use crate::token::claims::{AccessClaims, RefreshClaims, TokenKind, VerifiedClaims};

/// Verify a token against the secret for `kind` and return its claims
/// exactly as issued.
pub fn verify_token(config: &TokenConfig, kind: TokenKind, token: &str) -> Result<VerifiedClaims> {
    match kind {
        TokenKind::Access => verify_access_token(config, token).map(VerifiedClaims::Access),
        TokenKind::Refresh => verify_refresh_token(config, token).map(VerifiedClaims::Refresh),
    }
}

pub fn verify_access_token(config: &TokenConfig, token: &str) -> Result<AccessClaims> {
    let claims: AccessClaims = decode_claims(config, TokenKind::Access, token)?;
    if claims.is_expired() {
        return Err(Error::TokenExpired);
    }
    Ok(claims)
}

pub fn verify_refresh_token(config: &TokenConfig, token: &str) -> Result<RefreshClaims> {
    let claims: RefreshClaims = decode_claims(config, TokenKind::Refresh, token)?;
    if claims.is_expired() {
        return Err(Error::TokenExpired);
    }
    Ok(claims)
}

fn decode_claims<T: DeserializeOwned>(
    config: &TokenConfig,
    kind: TokenKind,
    token: &str,
) -> Result<T> {
    if token.is_empty() {
        return Err(Error::EmptyToken);
    }
    let key = DecodingKey::from_secret(config.secret(kind)?);

    // Zero leeway: an expiry at verification time is already too late.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<T>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            let err = match e.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                ErrorKind::InvalidSignature => Error::InvalidSignature,
                _ => Error::InvalidToken(e.to_string()),
            };
            tracing::warn!(kind = %kind, error = %err, "token rejected");
            err
        })
}
