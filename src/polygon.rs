//! Rounded regular polygon paths.
//!
//! [`generate`] places `sides` vertices on the unit circle, joins neighbours with cubic
//! Béziers whose control points are pushed out tangentially by `smoothness`, and picks a
//! square view box large enough for the rounded corners.

use std::f64::consts::TAU;
use std::fmt::Write;

use kurbo::BezPath;
use serde::{Serialize, Deserialize};

use crate::error::{PfpError, Result};
use crate::geometry::{to_cartesian, unit_point};
use crate::types::{PathSegment, Point2D};

const QUARTER_TURN: f64 = TAU / 4.0;

/// A closed contour plus the square view box that contains it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PolygonPath {
    pub start: Point2D,
    pub segments: Vec<PathSegment>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bounds: f64,
}

/// The attribute form handed to SVG renderers and JS callers.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PolygonPathAttrs {
    pub path: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "viewBox")]
    pub view_box: String,
    pub bounds: f64,
}

/// Builds the rounded polygon for `sides`, `rotation` (fraction of one sector) and
/// `smoothness` (0 sharp, 1 maximal rounding).
///
/// Only `sides < 3` is rejected. Out-of-range or non-finite `rotation` and `smoothness`
/// flow through the arithmetic unchanged.
///
/// `bounds` is sampled at three phases of one segment, not solved exactly. At high
/// smoothness for some side counts (seven sides at smoothness 1, for one) the curve
/// pokes a few hundredths past it, so a view box built from it can clip the outline.
/// Use `to_bez_path().bounding_box()` when the exact extent matters.
pub fn generate(sides: u32, rotation: f64, smoothness: f64) -> Result<PolygonPath> {
    if sides < 3 {
        return Err(PfpError::InvalidSides(sides));
    }

    let sector = Sector::new(sides, smoothness);
    let rotation_offset = rotation * sector.angle - QUARTER_TURN;

    let start = unit_point(rotation_offset);
    let segments = (0..sides)
        .map(|i| sector.segment(i, rotation_offset))
        .collect();

    let bounds = 1f64
        .max(sector.sample_bound(0.0))
        .max(sector.sample_bound(sector.angle))
        .max(sector.sample_bound(sector.angle / 2.0));

    Ok(PolygonPath {
        start,
        segments,
        x: -bounds,
        y: -bounds,
        width: 2.0 * bounds,
        height: 2.0 * bounds,
        bounds,
    })
}

struct Sector {
    angle: f64,
    reach: f64,
}

impl Sector {
    fn new(sides: u32, smoothness: f64) -> Sector {
        // chord between neighbouring unit-circle vertices
        let max_smooth = 2.0 * (std::f64::consts::PI / sides as f64).sin();
        Sector {
            angle: (1.0 / sides as f64) * TAU,
            reach: smoothness * max_smooth,
        }
    }

    fn segment(&self, i: u32, offset: f64) -> PathSegment {
        let from = self.angle * i as f64 + offset;
        let to = self.angle * (i + 1) as f64 + offset;
        PathSegment {
            c1: to_cartesian(from + QUARTER_TURN, self.reach, unit_point(from)),
            c2: to_cartesian(to - QUARTER_TURN, self.reach, unit_point(to)),
            end: unit_point(to),
        }
    }

    /// Bulge estimate of the second segment at phase `offset`: the t = 0.5 blend of its
    /// control points and endpoint with weights 1/4, 1/2, 1/4. The segment start is left
    /// out of the blend on purpose; the view-box margin is calibrated against it.
    fn sample_bound(&self, offset: f64) -> f64 {
        let PathSegment { c1, c2, end } = self.segment(1, offset);
        let t = 0.5;
        let (w1, w2, w3) = ((1.0 - t) * (1.0 - t), 2.0 * (1.0 - t) * t, t * t);
        let x = w1 * c1.x + w2 * c2.x + w3 * end.x;
        let y = w1 * c1.y + w2 * c2.y + w3 * end.y;
        x.abs().max(y.abs())
    }
}

impl PolygonPath {
    pub fn sides(&self) -> usize {
        self.segments.len()
    }

    pub fn endpoints(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.segments.iter().map(|s| s.end)
    }

    /// SVG `d` attribute: `M sx sy C x1 y1 x2 y2 x y C ...`.
    pub fn d(&self) -> String {
        let mut d = format!("M {} {}", self.start.x, self.start.y);
        for s in &self.segments {
            let _ = write!(
                d,
                " C {} {} {} {} {} {}",
                s.c1.x, s.c1.y, s.c2.x, s.c2.y, s.end.x, s.end.y
            );
        }
        d
    }

    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        bez.move_to(self.start);
        for s in &self.segments {
            bez.curve_to(s.c1, s.c2, s.end);
        }
        bez.close_path();
        bez
    }

    pub fn attrs(&self) -> PolygonPathAttrs {
        PolygonPathAttrs {
            path: self.d(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            view_box: self.view_box(),
            bounds: self.bounds,
        }
    }
}
