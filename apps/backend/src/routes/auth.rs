use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::services::auth::{self, UserProfile};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn register(
    req: web::Json<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session =
        auth::register(&app_state, &req.email, &req.password, &req.display_name).await?;
    Ok(HttpResponse::Created().json(session))
}

async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = auth::login(&app_state, &req.email, &req.password).await?;
    Ok(HttpResponse::Ok().json(session))
}

/// Profile of the bearer. A token for a user that no longer exists is
/// treated like any other invalid credential.
async fn me(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = app_state
        .users
        .find_by_id(current_user.id())
        .await?
        .ok_or_else(AppError::unauthorized)?;

    Ok(HttpResponse::Ok().json(UserProfile::from(&user)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/me").route(web::get().to(me)));
}
