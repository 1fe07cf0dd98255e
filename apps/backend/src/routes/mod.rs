use actix_web::web;

pub mod auth;
pub mod health;

/// Mount every route. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
}
