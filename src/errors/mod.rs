use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

/// Failure talking to the upstream tennis provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Provider answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// DNS, connect, timeout, reset or body read failure
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Error surfaced to API callers as a JSON envelope
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Transport(String),
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, message } => Self::Upstream { status, message },
            UpstreamError::Transport(message) => Self::Transport(message),
        }
    }
}

/// Body returned for every 4xx/5xx answer
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let status = self.status_code();
        let message = match self {
            Self::Upstream { status, .. } if StatusCode::from_u16(*status).is_ok() => {
                format!("API Error: {}", self)
            }
            Self::BadRequest(message) => message.clone(),
            _ => format!("An unexpected error occurred: {}", self),
        };

        ErrorEnvelope {
            timestamp: Local::now().naive_local(),
            message,
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = self.envelope();

        if envelope.status >= 500 {
            log::error!("Request failed with {}: {}", envelope.status, self);
        } else {
            log::warn!("Request failed with {}: {}", envelope.status, self);
        }

        let status =
            StatusCode::from_u16(envelope.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(envelope)).into_response()
    }
}
