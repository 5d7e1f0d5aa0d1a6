pub mod base64;
pub mod pipeline;
pub mod resize;
pub mod transcoder;

pub use pipeline::ResizePipeline;
pub use transcoder::{CodecError, ImageCodec, ImageRsCodec, OutputFormat};
