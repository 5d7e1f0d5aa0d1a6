//! Image container transcoding.
//!
//! The pipeline talks to the image codec through the [`ImageCodec`] trait;
//! [`ImageRsCodec`] binds the `image` crate. Decode failure is a normal
//! outcome (`None`), encode failure is not: a raster that reaches the
//! encoder has already been validated, so an encode error is surfaced as an
//! internal error rather than a request-level one.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use thiserror::Error;

use crate::models::Raster;

/// Output container for re-encoded images. Fixed to JPEG for this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("raster has unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    #[error("raster buffer does not match its dimensions")]
    MalformedRaster,

    #[error("image encode error: {0}")]
    Encode(String),
}

/// External image-codec capability: compressed bytes in, raster out, and
/// back.
pub trait ImageCodec {
    /// Decode a compressed byte buffer. Returns `None` when the buffer is
    /// not a recognizable, complete image container.
    fn decode(&self, bytes: &[u8]) -> Option<Raster>;

    /// Compress a raster into the given container format.
    fn encode(&self, raster: &Raster, format: OutputFormat) -> Result<Vec<u8>, CodecError>;
}

/// [`ImageCodec`] implementation backed by the `image` crate.
#[derive(Debug, Default, Clone)]
pub struct ImageRsCodec;

impl ImageRsCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for ImageRsCodec {
    fn decode(&self, bytes: &[u8]) -> Option<Raster> {
        let img = image::load_from_memory(bytes).ok()?;
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return None;
        }

        // Keep the source channel layout for 8-bit gray/RGB/RGBA; anything
        // else (16-bit, float) collapses to RGB8.
        let raster = match img {
            DynamicImage::ImageLuma8(buf) => Raster::from_raw(width, height, 1, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => Raster::from_raw(width, height, 3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => Raster::from_raw(width, height, 4, buf.into_raw()),
            other => Raster::from_raw(width, height, 3, other.into_rgb8().into_raw()),
        };
        raster
    }

    fn encode(&self, raster: &Raster, format: OutputFormat) -> Result<Vec<u8>, CodecError> {
        let img = match raster.channels {
            1 => GrayImage::from_raw(raster.width, raster.height, raster.data.clone())
                .map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(raster.width, raster.height, raster.data.clone())
                .map(DynamicImage::ImageRgb8),
            // JPEG has no alpha channel; flatten to RGB.
            4 => RgbaImage::from_raw(raster.width, raster.height, raster.data.clone())
                .map(|buf| DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(buf).into_rgb8())),
            ch => return Err(CodecError::UnsupportedChannels(ch)),
        }
        .ok_or(CodecError::MalformedRaster)?;

        let image_format = match format {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        };

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image_format)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }
}
