//! Bearer token codec.
//!
//! Tokens are three base64url (unpadded) segments joined by `.`:
//! a fixed header, the JSON claims, and a signature segment whose
//! derivation depends on the configured [`SigningScheme`]. Nothing is
//! stored server-side; validity is recomputed from the token itself.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use super::claims::Claims;
use super::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, SigningScheme};

/// Header segment emitted by the legacy scheme, byte for byte.
const LEGACY_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Why a token was refused. Only for operator logs; clients always see a
/// plain 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("token is not three dot-separated segments")]
    Malformed,
    #[error("payload is not a valid claims object")]
    InvalidClaims,
    #[error("token expired")]
    Expired,
    #[error("signature segment does not match")]
    SignatureMismatch,
}

#[derive(Clone)]
pub struct TokenCodec {
    secret: Arc<str>,
    scheme: SigningScheme,
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(security: &SecurityConfig) -> Self {
        Self::with_clock(security, Arc::new(SystemClock))
    }

    pub fn with_clock(security: &SecurityConfig, clock: Arc<dyn Clock>) -> Self {
        // Expiry is checked against our own clock before the signature, so
        // jsonwebtoken only verifies the MAC here.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            secret: Arc::from(security.token_secret.as_str()),
            scheme: security.scheme,
            clock,
            validation,
        }
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    /// Issue a 7-day token for the given principal.
    pub fn issue(&self, user_id: i64, email: &str, display_name: &str) -> Result<String, AppError> {
        let claims = Claims::issued_at(user_id, email, display_name, self.clock.now_unix());
        self.encode_claims(&claims)
    }

    /// Encode an already-stamped claims object. `issue` goes through here.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        match self.scheme {
            SigningScheme::Legacy => {
                let payload = serde_json::to_vec(claims)
                    .map_err(|e| AppError::internal(format!("Failed to encode claims: {e}")))?;
                let header = URL_SAFE_NO_PAD.encode(LEGACY_HEADER);
                let body = URL_SAFE_NO_PAD.encode(payload);
                let signature = self.legacy_signature(&header, &body);
                Ok(format!("{header}.{body}.{signature}"))
            }
            SigningScheme::Hs256 => encode(
                &Header::new(Algorithm::HS256),
                claims,
                &EncodingKey::from_secret(self.secret.as_bytes()),
            )
            .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}"))),
        }
    }

    /// Run every gate and report which one failed.
    ///
    /// Order: segment count, claims decode, expiry, signature.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        let mut segments = token.split('.');
        let (Some(header), Some(body), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenRejection::Malformed);
        };

        let payload = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|_| TokenRejection::InvalidClaims)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenRejection::InvalidClaims)?;

        if claims.is_expired_at(self.clock.now_unix()) {
            return Err(TokenRejection::Expired);
        }

        match self.scheme {
            SigningScheme::Legacy => {
                if self.legacy_signature(header, body) != signature {
                    return Err(TokenRejection::SignatureMismatch);
                }
            }
            SigningScheme::Hs256 => {
                decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(self.secret.as_bytes()),
                    &self.validation,
                )
                // Claims already decoded above, so anything else left here
                // is a header or encoding problem.
                .map_err(|e| match e.kind() {
                    ErrorKind::InvalidSignature => TokenRejection::SignatureMismatch,
                    _ => TokenRejection::Malformed,
                })?;
            }
        }

        Ok(claims)
    }

    /// Validate a presented token. Every failure collapses to `None`.
    pub fn validate(&self, token: &str) -> Option<Claims> {
        match self.verify(token) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                debug!(%reason, "bearer token rejected");
                None
            }
        }
    }

    fn legacy_signature(&self, header: &str, body: &str) -> String {
        URL_SAFE_NO_PAD.encode(format!("{header}.{body}.{}", self.secret))
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("scheme", &self.scheme)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
