//! Nearest-neighbor resize over raw rasters.
//!
//! Implemented directly rather than through the codec library: the sampling
//! rule (`src = dst * src_dim / dst_dim`, plain floor) is part of the
//! service contract and differs from the half-pixel-centered nearest filter
//! most libraries use.

use crate::models::Raster;

/// Resize a raster to exactly `width x height` pixels, same channel layout.
///
/// Each output pixel takes the single closest source pixel under a linear
/// coordinate scale. Deterministic; the input raster must be non-empty and
/// the target dimensions positive (both enforced upstream).
pub fn resize_nearest(src: &Raster, width: u32, height: u32) -> Raster {
    debug_assert!(!src.is_empty());
    debug_assert!(width > 0 && height > 0);

    let ch = src.channels as usize;
    let mut data = vec![0u8; width as usize * height as usize * ch];

    for dst_y in 0..height {
        // u64 keeps dst * src_dim from overflowing for large targets.
        let src_y = (u64::from(dst_y) * u64::from(src.height) / u64::from(height)) as u32;
        for dst_x in 0..width {
            let src_x = (u64::from(dst_x) * u64::from(src.width) / u64::from(width)) as u32;

            let dst_idx = (dst_y as usize * width as usize + dst_x as usize) * ch;
            data[dst_idx..dst_idx + ch].copy_from_slice(src.pixel(src_x, src_y));
        }
    }

    Raster {
        width,
        height,
        channels: src.channels,
        data,
    }
}
