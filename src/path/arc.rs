//! Elliptical arc support.
//!
//! Arcs are stored in endpoint form (the path-string form). This module converts them to
//! cubic Bezier octets for consumers that cannot draw arcs, and to the center form used for
//! sampling, projection and splitting.

use std::f64::consts::FRAC_PI_2;

use kurbo::{Arc, SvgArc};

use crate::foundation::core::{Affine, Point, Vec2};

/// Largest angular span covered by a single emitted cubic segment.
pub const MAX_SEGMENT_ANGLE: f64 = FRAC_PI_2;

/// Endpoint-form arc input, in the argument order of the `A` path command.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcDescriptor {
    pub start_x: f64,
    pub start_y: f64,
    pub rx: f64,
    pub ry: f64,
    pub x_axis_rotation_degrees: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end_x: f64,
    pub end_y: f64,
}

impl ArcDescriptor {
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }
}

/// Result of [`arc_to_beziers`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ArcConversion {
    /// Start and end coincide; nothing is drawn.
    Empty,
    /// A zero radius collapses the arc to a straight line.
    Line { end: Point },
    /// One `[sx, sy, c1x, c1y, c2x, c2y, ex, ey]` octet per cubic segment.
    Curves(Vec<[f64; 8]>),
}

/// Center parameterization of an elliptical arc.
///
/// `rx`/`ry` are the effective radii, i.e. already scaled up when the authored radii were too
/// small to span the chord.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation in radians.
    pub phi: f64,
    pub theta1: f64,
    pub delta_theta: f64,
}

impl CenterArc {
    /// Endpoint to center conversion via [`kurbo::Arc::from_svg_arc`].
    ///
    /// Returns `None` for the degenerate cases: coincident endpoints or a (near) zero radius.
    /// Radii too small to span the chord come back scaled up.
    pub fn from_descriptor(arc: &ArcDescriptor) -> Option<Self> {
        let svg = SvgArc {
            from: arc.start(),
            to: arc.end(),
            radii: Vec2::new(arc.rx, arc.ry),
            x_rotation: arc.x_axis_rotation_degrees.to_radians(),
            large_arc: arc.large_arc,
            sweep: arc.sweep,
        };
        let center = Arc::from_svg_arc(&svg)?;
        Some(Self {
            center: center.center,
            rx: center.radii.x,
            ry: center.radii.y,
            phi: center.x_rotation,
            theta1: center.start_angle,
            delta_theta: center.sweep_angle,
        })
    }

    pub fn angle_at(&self, t: f64) -> f64 {
        self.theta1 + self.delta_theta * t
    }

    /// Point on the ellipse at parametric angle `theta`.
    pub fn point_at_angle(&self, theta: f64) -> Point {
        let (sin_t, cos_t) = theta.sin_cos();
        self.to_world() * Point::new(self.rx * cos_t, self.ry * sin_t)
    }

    /// Point at `t ∈ [0, 1]` along the angular span.
    pub fn eval(&self, t: f64) -> Point {
        self.point_at_angle(self.angle_at(t))
    }

    fn to_world(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(self.phi)
    }
}

/// Converts an endpoint-form arc into cubic Bezier octets.
pub fn arc_to_beziers(arc: &ArcDescriptor) -> ArcConversion {
    if arc.start_x == arc.end_x && arc.start_y == arc.end_y {
        return ArcConversion::Empty;
    }
    if arc.rx == 0.0 || arc.ry == 0.0 {
        return ArcConversion::Line { end: arc.end() };
    }
    let Some(center) = CenterArc::from_descriptor(arc) else {
        return ArcConversion::Line { end: arc.end() };
    };

    // Spans that are an exact multiple of the max angle must not gain a sliver segment.
    let segments = (center.delta_theta.abs() / MAX_SEGMENT_ANGLE - 1e-9)
        .ceil()
        .max(1.0) as usize;
    let step = center.delta_theta / segments as f64;
    let world = center.to_world();

    let mut out = Vec::with_capacity(segments);
    let mut from = arc.start();
    for i in 0..segments {
        let th0 = center.theta1 + step * i as f64;
        let th1 = th0 + step;
        let kappa = 4.0 / 3.0 * (step / 4.0).tan();

        let (sin0, cos0) = th0.sin_cos();
        let (sin1, cos1) = th1.sin_cos();
        let c1 = world
            * Point::new(
                center.rx * (cos0 - kappa * sin0),
                center.ry * (sin0 + kappa * cos0),
            );
        let c2 = world
            * Point::new(
                center.rx * (cos1 + kappa * sin1),
                center.ry * (sin1 - kappa * cos1),
            );
        let to = if i + 1 == segments {
            arc.end()
        } else {
            world * Point::new(center.rx * cos1, center.ry * sin1)
        };

        out.push([from.x, from.y, c1.x, c1.y, c2.x, c2.y, to.x, to.y]);
        from = to;
    }
    ArcConversion::Curves(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/arc.rs"]
mod tests;
