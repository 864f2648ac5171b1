use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::polygon::{self, PolygonPath};

/// A Cartesian coordinate in view-box space.
pub type Point2D = kurbo::Point;

/// One cubic Bézier command: two control points and an endpoint.
/// The start point is the previous segment's endpoint (or the path start).
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct PathSegment {
    pub c1: Point2D,
    pub c2: Point2D,
    pub end: Point2D,
}

/// Inputs of the polygon generator.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct PolygonRequest {
    pub sides: u32,
    pub rotation: f64,   // fraction of one sector, not radians
    pub smoothness: f64, // 0 = sharp, 1 = maximal rounding
}

impl Default for PolygonRequest {
    fn default() -> Self {
        PolygonRequest { sides: 6, rotation: 0.0, smoothness: 0.5 }
    }
}

impl PolygonRequest {
    pub fn generate(&self) -> Result<PolygonPath> {
        polygon::generate(self.sides, self.rotation, self.smoothness)
    }
}

/// Crop area in source pixels, as reported by the cropper.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// Largest square centered in a `width` x `height` image.
    pub fn centered_square(width: u32, height: u32) -> CropRect {
        let side = width.min(height) as f64;
        CropRect {
            x: ((width as f64 - side) / 2.0).floor(),
            y: ((height as f64 - side) / 2.0).floor(),
            width: side,
            height: side,
        }
    }
}

/// Export settings. Any field missing from the JSON keeps its default.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct ExportConfig {
    /// Edge length of the exported square PNG, in pixels.
    pub size: u32,
    /// Uploaded images narrower than this are scaled up to it.
    pub min_scaled_width: u32,
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            size: 400,
            min_scaled_width: 1920,
            filename: "hexagon-pfp.png".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<ExportConfig> {
        if json.trim().is_empty() {
            return Ok(ExportConfig::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
