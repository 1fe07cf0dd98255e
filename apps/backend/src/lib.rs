#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::password::derive_password_verifier;
pub use auth::token::{TokenCodec, TokenRejection};
pub use error::AppError;
pub use extractors::current_user::CurrentUser;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::{SecurityConfig, SigningScheme};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
