use actix_web::{web, App, HttpServer};
use ggnet_backend::middleware::cors::cors_middleware;
use ggnet_backend::middleware::request_trace::RequestTrace;
use ggnet_backend::middleware::structured_logger::StructuredLogger;
use ggnet_backend::routes;
use ggnet_backend::state::app_state::AppState;
use ggnet_backend::state::security_config::{SecurityConfig, SigningScheme};
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let security = match SecurityConfig::from_env() {
        Ok(security) => security,
        Err(e) => {
            error!(error = %e, "refusing to start");
            std::process::exit(1);
        }
    };

    if security.scheme == SigningScheme::Legacy {
        warn!(
            "TOKEN_SIGNING=legacy: the signature segment is a reversible encoding that \
             exposes the secret; set TOKEN_SIGNING=hs256 once old tokens have expired"
        );
    }

    let data = web::Data::new(AppState::in_memory(security));

    info!(%host, port, "starting GGNetworking backend");

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
