use actix_web::http::header;
use actix_web::HttpRequest;

use crate::error::AppError;

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Every malformed shape is the same `Unauthorized` as an invalid token.
pub fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized)?
        .to_str()
        .map_err(|_| AppError::unauthorized())?;

    let mut parts = auth_value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::unauthorized()),
    }
}
