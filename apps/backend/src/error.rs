use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

/// Detail sent for every authentication failure. Deliberately the same for
/// missing, malformed, expired and forged credentials.
pub const UNAUTHORIZED_DETAIL: &str = "Invalid or missing credentials";

/// RFC 7807 problem body.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Conflict { code, .. } => code,
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Client-facing detail. Internal and config failures are not echoed.
    fn public_detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::Unauthorized => UNAUTHORIZED_DETAIL.to_string(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "An internal error occurred".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.public_detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
