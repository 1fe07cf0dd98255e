//! Claims carried inside GGNetworking bearer tokens.

use serde::{Deserialize, Serialize};

/// Lifetime of an issued token: 7 days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Claims included in every issued token.
///
/// Field order is part of the wire format: issued payloads serialize as
/// `userId, email, displayName, iat, exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub display_name: String,
    /// Issued-at (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch). Tokens without it never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Stamp fresh claims issued at `now`.
    pub fn issued_at(user_id: i64, email: &str, display_name: &str, now: i64) -> Self {
        Self {
            user_id,
            email: email.to_string(),
            display_name: display_name.to_string(),
            iat: Some(now),
            exp: Some(now + TOKEN_TTL_SECS),
        }
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if exp < now)
    }
}
