pub mod raster;
pub mod request;

pub use raster::Raster;
pub use request::ResizeRequest;
