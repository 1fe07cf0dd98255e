//! Password verifier derivation.
//!
//! Verifiers are `hex(sha256(password || secret || PASSWORD_SALT))`. The salt
//! is a fixed literal so existing stored verifiers keep matching; there is
//! no per-user salt.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const PASSWORD_SALT: &str = "ggnetworking_salt";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reject passwords shorter than [`MIN_PASSWORD_LEN`] characters.
pub fn check_password_policy(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::invalid(
            "PASSWORD_TOO_SHORT",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Derive the stored verifier for `password`. Deterministic: the same
/// password and secret always produce the same 64-char lowercase hex string.
pub fn derive_password_verifier(password: &str, security: &SecurityConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(security.token_secret.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the verifier for `password` and compare it with `stored`.
pub fn verify_password(password: &str, stored: &str, security: &SecurityConfig) -> bool {
    derive_password_verifier(password, security) == stored
}
