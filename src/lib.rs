pub mod error;
pub mod types;
pub mod geometry;
pub mod polygon;
pub mod controls;
pub mod throttle;
pub mod image_ops;
pub mod svg;
pub mod raster;
pub mod bindings;

pub use error::{PfpError, Result};
pub use polygon::{generate, PolygonPath, PolygonPathAttrs};
pub use types::*;
