use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::auth_token::bearer_token;
use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Authenticated principal, taken from a validated bearer token.
///
/// Add it as a handler argument to make a route protected.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub claims: Claims,
}

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.claims.user_id
    }

    fn authenticate(req: &HttpRequest) -> Result<Self, AppError> {
        let token = bearer_token(req)?;

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        match app_state.tokens.verify(&token) {
            Ok(claims) => Ok(CurrentUser { claims }),
            Err(reason) => {
                security::token_rejected(&reason.to_string());
                Err(AppError::unauthorized())
            }
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::authenticate(req))
    }
}
