//! Image fixtures generated in-process with the `image` crate.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// A solid-color JPEG of the given size, as raw container bytes.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 90, 180]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .expect("JPEG encode");
    buf.into_inner()
}

/// A solid-color JPEG of the given size, base64-encoded.
pub fn jpeg_base64(width: u32, height: u32) -> String {
    STANDARD.encode(jpeg_bytes(width, height))
}

/// A solid-color PNG of the given size, base64-encoded.
pub fn png_base64(width: u32, height: u32) -> String {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 90, 180]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .expect("PNG encode");
    STANDARD.encode(buf.into_inner())
}

/// Decode a base64 JPEG payload and return its pixel dimensions.
pub fn decoded_dimensions(output_jpeg: &str) -> (u32, u32) {
    let bytes = STANDARD.decode(output_jpeg).expect("valid base64 output");
    let img = image::load_from_memory(&bytes).expect("decodable output image");
    (img.width(), img.height())
}
