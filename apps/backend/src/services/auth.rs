//! Registration and login flows: the callers of the token codec and the
//! password verifier.

use serde::Serialize;
use tracing::info;

use crate::auth::password::{check_password_policy, derive_password_verifier, verify_password};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::services::users::{normalize_email, NewUser, UserRecord};
use crate::state::app_state::AppState;

pub const MAX_DISPLAY_NAME_LEN: usize = 50;

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            display_name: record.display_name.clone(),
        }
    }
}

/// Returned by both register and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

fn validate_email(email: &str) -> Result<String, AppError> {
    let email = normalize_email(email);
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };
    if !well_formed {
        return Err(AppError::invalid(
            "INVALID_EMAIL",
            "A valid email address is required".to_string(),
        ));
    }
    Ok(email)
}

fn validate_display_name(display_name: &str) -> Result<String, AppError> {
    let display_name = display_name.trim();
    if display_name.is_empty() || display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(AppError::invalid(
            "INVALID_DISPLAY_NAME",
            format!("Display name must be 1 to {MAX_DISPLAY_NAME_LEN} characters"),
        ));
    }
    Ok(display_name.to_string())
}

fn open_session(state: &AppState, user: &UserRecord) -> Result<AuthSession, AppError> {
    let token = state
        .tokens
        .issue(user.id, &user.email, &user.display_name)?;
    Ok(AuthSession {
        token,
        user: UserProfile::from(user),
    })
}

/// Create an account and issue its first token.
pub async fn register(
    state: &AppState,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<AuthSession, AppError> {
    let email = validate_email(email)?;
    let display_name = validate_display_name(display_name)?;
    check_password_policy(password)?;

    let user = state
        .users
        .insert(NewUser {
            email,
            display_name,
            password_verifier: derive_password_verifier(password, &state.security),
        })
        .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    open_session(state, &user)
}

/// Check credentials and issue a token.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<AuthSession, AppError> {
    let Some(user) = state.users.find_by_email(email).await? else {
        security::login_failed("unknown_email", email);
        return Err(AppError::unauthorized());
    };

    if !verify_password(password, &user.password_verifier, &state.security) {
        security::login_failed("wrong_password", email);
        return Err(AppError::unauthorized());
    }

    info!(user_id = user.id, "user logged in");
    open_session(state, &user)
}
