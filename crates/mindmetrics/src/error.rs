//! Process-level error type shared by the binary entry points.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::assessments::bank::BankImportError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Bank(BankImportError),
    Io(std::io::Error),
    Server(axum::Error),
}

impl AppError {
    fn label(&self) -> &'static str {
        match self {
            AppError::Config(_) => "configuration",
            AppError::Telemetry(_) => "telemetry",
            AppError::Bank(_) => "question bank",
            AppError::Io(_) => "io",
            AppError::Server(_) => "server",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            // malformed bank uploads are a client error
            AppError::Bank(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: &dyn fmt::Display = match self {
            AppError::Config(err) => err,
            AppError::Telemetry(err) => err,
            AppError::Bank(err) => err,
            AppError::Io(err) => err,
            AppError::Server(err) => err,
        };
        write!(f, "{} error: {}", self.label(), inner)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Bank(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        Self::Telemetry(err)
    }
}

impl From<BankImportError> for AppError {
    fn from(err: BankImportError) -> Self {
        Self::Bank(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        Self::Server(err)
    }
}
