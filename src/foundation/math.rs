use crate::foundation::core::Point;

/// Absolute tolerance for treating two coordinates as the same point.
pub(crate) const POINT_EPSILON: f64 = 1e-9;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise `a + (b - a) * t`; extrapolates outside `[0, 1]`.
pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

pub(crate) fn points_close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= POINT_EPSILON && (a.y - b.y).abs() <= POINT_EPSILON
}

/// Shortest round-trip decimal text for a coordinate; never prints `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}
