//! Signing secrets and token lifetimes, read once at process start.
//! Used by: token::issue, token::verify.

use std::fmt;

use crate::error::{Error, Result};
use crate::token::claims::TokenKind;

const ACCESS_SECRET_VAR: &str = "JWT_SECRET_KEY";
const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_KEY";
const ACCESS_TTL_VAR: &str = "JWT_TOKEN_EXPIRED";
const REFRESH_TTL_VAR: &str = "JWT_REFRESH_EXPIRED";

/// Secrets and TTLs for both token kinds. Read-only after construction;
/// safe to share across threads without coordination.
#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
}

impl TokenConfig {
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// Load from the environment, failing on missing or empty secrets
    /// and on missing or non-numeric TTLs. Call at startup so a
    /// misconfigured process dies before it ever signs a token.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_secret: require_var(ACCESS_SECRET_VAR)?,
            refresh_secret: require_var(REFRESH_SECRET_VAR)?,
            access_ttl_seconds: require_seconds(ACCESS_TTL_VAR)?,
            refresh_ttl_seconds: require_seconds(REFRESH_TTL_VAR)?,
        })
    }

    pub(crate) fn secret(&self, kind: TokenKind) -> Result<&[u8]> {
        let secret = match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        };
        if secret.is_empty() {
            return Err(Error::MissingSecret(kind));
        }
        Ok(secret.as_bytes())
    }

    pub(crate) fn ttl_seconds(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_ttl_seconds,
            TokenKind::Refresh => self.refresh_ttl_seconds,
        }
    }
}

// Secrets must never reach logs, not even through derived formatting.
impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("access_secret", &"[hidden]")
            .field("refresh_secret", &"[hidden]")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}

fn require_seconds(name: &str) -> Result<i64> {
    require_var(name)?
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a whole number of seconds", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_and_ttl_selected_by_kind() {
        let config = TokenConfig::new("access-secret", "refresh-secret", 900, 604800);
        assert_eq!(config.secret(TokenKind::Access).unwrap(), b"access-secret");
        assert_eq!(config.secret(TokenKind::Refresh).unwrap(), b"refresh-secret");
        assert_eq!(config.ttl_seconds(TokenKind::Access), 900);
        assert_eq!(config.ttl_seconds(TokenKind::Refresh), 604800);
    }

    #[test]
    fn empty_secret_rejected() {
        let config = TokenConfig::new("", "refresh-secret", 900, 604800);
        assert!(matches!(
            config.secret(TokenKind::Access),
            Err(Error::MissingSecret(TokenKind::Access))
        ));
        assert!(config.secret(TokenKind::Refresh).is_ok());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = TokenConfig::new("top-secret-a", "top-secret-r", 900, 604800);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("top-secret-a"));
        assert!(!rendered.contains("top-secret-r"));
        assert!(rendered.contains("900"));
    }

    // Single test so the env mutations cannot race each other.
    #[test]
    fn from_env_reads_and_validates() {
        std::env::set_var(ACCESS_SECRET_VAR, "env-access");
        std::env::set_var(REFRESH_SECRET_VAR, "env-refresh");
        std::env::set_var(ACCESS_TTL_VAR, "900");
        std::env::set_var(REFRESH_TTL_VAR, "604800");

        let config = TokenConfig::from_env().expect("all four variables set");
        assert_eq!(config.access_secret, "env-access");
        assert_eq!(config.refresh_secret, "env-refresh");
        assert_eq!(config.access_ttl_seconds, 900);
        assert_eq!(config.refresh_ttl_seconds, 604800);

        std::env::set_var(ACCESS_TTL_VAR, "fifteen minutes");
        assert!(matches!(TokenConfig::from_env(), Err(Error::Config(_))));
        std::env::set_var(ACCESS_TTL_VAR, "900");

        std::env::set_var(ACCESS_SECRET_VAR, "");
        assert!(matches!(TokenConfig::from_env(), Err(Error::Config(_))));

        std::env::remove_var(ACCESS_SECRET_VAR);
        assert!(matches!(TokenConfig::from_env(), Err(Error::Config(_))));
    }
}
