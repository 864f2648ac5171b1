use crate::types::Point2D;

/// Point at `angle` radians on the unit circle around the origin.
pub fn unit_point(angle: f64) -> Point2D {
    to_cartesian(angle, 1.0, Point2D::ORIGIN)
}

/// Point at `angle` radians and `distance` away from `offset`.
pub fn to_cartesian(angle: f64, distance: f64, offset: Point2D) -> Point2D {
    Point2D::new(
        offset.x + angle.cos() * distance,
        offset.y + angle.sin() * distance,
    )
}
