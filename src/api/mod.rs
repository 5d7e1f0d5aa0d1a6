pub mod resize;

pub use resize::{handle_resize, ResizeRequestBody, ResizeResponse, __path_handle_resize};
