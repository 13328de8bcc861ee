use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::parse::TileParseError;
use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("No usable response from language model")]
    EmptyCompletion,

    #[error(transparent)]
    Parse(#[from] TileParseError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            text: Option<String>,
        }

        let (status, error_message, details, text) = match self {
            AppError::ValidationError(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error".to_string(),
                Some(err.to_string()),
                None,
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
                None,
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
                None,
            ),
            AppError::Provider(err) => provider_parts(err),
            AppError::EmptyCompletion => (
                StatusCode::BAD_GATEWAY,
                "No usable response from language model".to_string(),
                None,
                None,
            ),
            AppError::Parse(err) => parse_parts(err),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(format!("{:#}", err)),
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
                text,
            }),
        )
            .into_response()
    }
}

fn provider_parts(err: ProviderError) -> (StatusCode, String, Option<String>, Option<String>) {
    match err {
        ProviderError::NotConfigured(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error".to_string(),
            Some(msg),
            None,
        ),
        ProviderError::ApiError { status, body } => (
            StatusCode::BAD_GATEWAY,
            "Upstream model API error".to_string(),
            Some(format!("{}: {}", status, body)),
            None,
        ),
        ProviderError::MalformedResponse(msg) => (
            StatusCode::BAD_GATEWAY,
            "Upstream model API returned a malformed response".to_string(),
            Some(msg),
            None,
        ),
        ProviderError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "Upstream model API rate limit exceeded".to_string(),
            None,
            None,
        ),
        ProviderError::ContentFiltered => (
            StatusCode::BAD_GATEWAY,
            "Upstream model API filtered the response".to_string(),
            None,
            None,
        ),
        ProviderError::NetworkError(msg) => (
            StatusCode::BAD_GATEWAY,
            "Upstream model API unreachable".to_string(),
            Some(msg),
            None,
        ),
    }
}

// Parse failures echo the cleaned reply text so callers can see what the
// model actually returned.
fn parse_parts(err: TileParseError) -> (StatusCode, String, Option<String>, Option<String>) {
    let message = match &err {
        TileParseError::Unparsable { .. } => "Failed to parse model reply as JSON",
        TileParseError::NotAnArray { .. } => "Model reply was not a JSON array",
        TileParseError::NoValidTiles { .. } => "No valid tiles in model reply",
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        message.to_string(),
        None,
        Some(err.into_text()),
    )
}
