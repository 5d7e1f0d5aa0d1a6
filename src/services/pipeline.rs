//! Request processing pipeline.
//!
//! Drives validate -> base64 decode -> image decode -> resize -> re-encode
//! -> base64 encode for one request. Every failure is typed and returned at
//! the step that produced it; nothing is retried. The pipeline holds no
//! mutable state, so concurrent invocations share nothing.

use serde_json::Value;

use crate::error::ProcessError;
use crate::models::ResizeRequest;
use crate::services::base64;
use crate::services::resize::resize_nearest;
use crate::services::transcoder::{ImageCodec, ImageRsCodec, OutputFormat};

pub struct ResizePipeline<C: ImageCodec = ImageRsCodec> {
    codec: C,
    output_format: OutputFormat,
}

impl ResizePipeline<ImageRsCodec> {
    pub fn new() -> Self {
        Self::with_codec(ImageRsCodec::new())
    }
}

impl Default for ResizePipeline<ImageRsCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> ResizePipeline<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            output_format: OutputFormat::Jpeg,
        }
    }

    /// Process one request document into a base64-encoded output image.
    pub fn process(&self, doc: &Value) -> Result<String, ProcessError> {
        let request = ResizeRequest::from_document(doc)?;

        let compressed =
            base64::decode(&request.input_jpeg).map_err(|_| ProcessError::InvalidBase64)?;

        let raster = self
            .codec
            .decode(&compressed)
            .ok_or(ProcessError::InvalidImage)?;

        tracing::debug!(
            src_width = raster.width,
            src_height = raster.height,
            channels = raster.channels,
            dst_width = request.desired_width,
            dst_height = request.desired_height,
            "Resizing decoded image"
        );

        let resized = resize_nearest(&raster, request.desired_width, request.desired_height);

        let encoded = self
            .codec
            .encode(&resized, self.output_format)
            .map_err(|e| ProcessError::Internal(e.to_string()))?;

        Ok(base64::encode(&encoded))
    }
}
