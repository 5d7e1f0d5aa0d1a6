use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::ResizePipeline;

/// Request body for image resizing.
///
/// Documentation-only mirror of the wire contract; the handler parses the
/// body itself so that the ordered missing-field check owns its error
/// messages (axum's `Json` rejection would answer first otherwise).
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResizeRequestBody {
    /// Base64-encoded input image (any decodable container)
    pub input_jpeg: String,
    /// Target width in pixels
    pub desired_width: u32,
    /// Target height in pixels
    pub desired_height: u32,
}

/// Response from image resizing
#[derive(Debug, Serialize, ToSchema)]
pub struct ResizeResponse {
    /// Status code (200 = success)
    pub code: u16,
    /// Status message
    pub message: String,
    /// Base64-encoded JPEG result, present on success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_jpeg: Option<String>,
}

/// Resize a base64-encoded image
///
/// Decodes the input image, resizes it to the desired dimensions with
/// nearest-neighbor sampling and returns the result as base64-encoded JPEG.
#[utoipa::path(
    post,
    path = "/resize_image",
    request_body = ResizeRequestBody,
    responses(
        (status = 200, description = "Image resized successfully", body = ResizeResponse),
        (status = 400, description = "Missing or invalid request field", body = ResizeResponse),
        (status = 415, description = "Content-Type is not application/json", body = ResizeResponse),
        (status = 422, description = "Body is not parseable, or the payload is not a decodable image", body = ResizeResponse),
    ),
    tag = "Resize"
)]
pub async fn handle_resize(
    State(pipeline): State<Arc<ResizePipeline>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("application/json") {
        return Err(ApiError::UnsupportedContentType);
    }

    let doc: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::JsonParse(e.to_string()))?;

    let output_jpeg = pipeline.process(&doc).inspect_err(|e| {
        tracing::info!(error = %e, "Resize request rejected");
    })?;

    tracing::info!(output_bytes = output_jpeg.len(), "Resize request served");

    Ok(Json(ResizeResponse {
        code: 200,
        message: "success".to_string(),
        output_jpeg: Some(output_jpeg),
    }))
}
