use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Environment variable holding the server-side token secret.
pub const SECRET_ENV: &str = "JWT_SECRET";
/// Environment variable selecting the token signing scheme.
pub const SIGNING_ENV: &str = "TOKEN_SIGNING";

/// How the third token segment is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    /// base64url of `"<seg1>.<seg2>.<secret>"`. Compatible with tokens issued
    /// by the previous deployment, but not a MAC: decoding the segment
    /// reveals the secret.
    #[default]
    Legacy,
    /// HMAC-SHA256 over `"<seg1>.<seg2>"`.
    Hs256,
}

impl FromStr for SigningScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "hs256" | "hmac-sha256" => Ok(Self::Hs256),
            other => Err(AppError::config(format!(
                "{SIGNING_ENV} must be 'legacy' or 'hs256', got '{other}'"
            ))),
        }
    }
}

/// Secret material shared by the token codec and the password verifier.
/// Loaded once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct SecurityConfig {
    pub token_secret: String,
    pub scheme: SigningScheme,
}

impl SecurityConfig {
    /// Create a config with the given secret and the legacy scheme
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            scheme: SigningScheme::Legacy,
        }
    }

    pub fn with_scheme(mut self, scheme: SigningScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Read `JWT_SECRET` (required) and `TOKEN_SIGNING` (optional).
    ///
    /// A missing or blank secret is a configuration error; callers at
    /// startup treat it as fatal.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var(SECRET_ENV)
            .map_err(|_| AppError::config(format!("{SECRET_ENV} must be set")))?;
        if secret.trim().is_empty() {
            return Err(AppError::config(format!("{SECRET_ENV} must not be empty")));
        }

        let scheme = match std::env::var(SIGNING_ENV) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SigningScheme::default(),
        };

        Ok(Self::new(secret).with_scheme(scheme))
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("token_secret", &"[REDACTED]")
            .field("scheme", &self.scheme)
            .finish()
    }
}
