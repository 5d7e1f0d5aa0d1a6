use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Typed outcome of a pipeline run that did not produce an image.
///
/// The display strings are part of the wire contract and must not change:
/// clients exact-match them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("{0} is not available in data.")]
    MissingField(&'static str),

    #[error("{field} must be {expected}.")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Input is not valid base64-encoded data.")]
    InvalidBase64,

    #[error("String input is not a valid image encoded data.")]
    InvalidImage,

    #[error("Image processing error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Content-Type error: payload must be defined as application/json")]
    UnsupportedContentType,

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::JsonParse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Process(e) => match e {
                ProcessError::MissingField(_) | ProcessError::InvalidField { .. } => {
                    StatusCode::BAD_REQUEST
                }
                ProcessError::InvalidBase64 | ProcessError::InvalidImage => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ProcessError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "code": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
