use serde::{Deserialize, Serialize};

use crate::types::PolygonRequest;

const QUARTER_TICKS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeParameter {
    pub name: String,
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub ticks: Vec<f64>,
}

impl ShapeParameter {
    fn ranged(name: &str, key: &str, min: f64, max: f64, default: f64, step: f64) -> Self {
        ShapeParameter {
            name: name.to_string(),
            key: key.to_string(),
            min,
            max,
            default,
            step,
            ticks: Vec::new(),
        }
    }

    fn with_ticks(mut self, ticks: &[f64]) -> Self {
        self.ticks = ticks.to_vec();
        self
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub fn rotation_parameter() -> ShapeParameter {
    ShapeParameter::ranged("Rotation", "rotation", 0.0, 1.0, 0.0, 0.01).with_ticks(&QUARTER_TICKS)
}

pub fn smoothness_parameter() -> ShapeParameter {
    ShapeParameter::ranged("Smoothness", "smoothness", 0.0, 1.0, 0.5, 0.005)
        .with_ticks(&QUARTER_TICKS)
}

pub fn sides_parameter() -> ShapeParameter {
    ShapeParameter::ranged("Sides", "sides", 3.0, 10.0, 6.0, 1.0)
}

/// Slider order as shown to the user.
pub fn parameters() -> Vec<ShapeParameter> {
    vec![rotation_parameter(), smoothness_parameter(), sides_parameter()]
}

/// Current slider values. Setters clamp into each slider's range.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    sides: u32,
    rotation: f64,
    smoothness: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        let req = PolygonRequest::default();
        ControlState {
            sides: req.sides,
            rotation: req.rotation,
            smoothness: req.smoothness,
        }
    }
}

impl ControlState {
    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    pub fn set_sides(&mut self, sides: u32) {
        let p = sides_parameter();
        self.sides = sides.clamp(p.min as u32, p.max as u32);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation_parameter().clamp(rotation);
    }

    pub fn set_smoothness(&mut self, smoothness: f64) {
        self.smoothness = smoothness_parameter().clamp(smoothness);
    }

    /// Rotation in whole degrees of the polygon's own sector, e.g. `"30°"`.
    /// Halves round away from zero.
    pub fn rotation_label(&self) -> String {
        format!("{}°", (self.rotation * (360.0 / self.sides as f64)).round())
    }

    /// Smoothness as a percentage, 0.5 reads as `"100%"`.
    pub fn smoothness_label(&self) -> String {
        format!("{}%", (((self.smoothness + 0.5) * 2.0 - 1.0) * 100.0).round())
    }

    pub fn sides_label(&self) -> String {
        self.sides.to_string()
    }

    pub fn request(&self) -> PolygonRequest {
        PolygonRequest {
            sides: self.sides,
            rotation: self.rotation,
            smoothness: self.smoothness,
        }
    }
}
