//! Resizerd - JSON-over-HTTP image resizing service.
//!
//! Accepts a base64-encoded image plus target dimensions on a single
//! endpoint, resizes it with nearest-neighbor sampling and returns the
//! result as base64-encoded JPEG.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
