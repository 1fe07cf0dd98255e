use actix_cors::Cors;
use actix_web::http::header;

pub const CORS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Parse a comma-separated origin list, dropping blanks, `null` and
/// anything that is not http(s).
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// CORS for the web client. Origins come from `CORS_ALLOWED_ORIGINS` and
/// fall back to the local dev server.
pub fn cors_middleware() -> Cors {
    let configured = parse_origins(&std::env::var(CORS_ENV).unwrap_or_default());
    let origins = if configured.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
