//! Path-string parsing.
//!
//! Tokenizing is delegated to [`svgtypes::PathParser`]; this module maps its segments onto
//! [`PathBuilder`]. Relative coordinates are resolved against the current point, `H`/`V` become
//! lines, and `S`/`T` become full curves with the reflected control point, so the resulting
//! [`Path`] only holds the `M L Q C Z A` kinds in absolute form.

use svgtypes::{PathParser, PathSegment};

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::path::builder::PathBuilder;
use crate::path::model::Path;

/// Control point remembered for `S`/`T` reflection.
#[derive(Clone, Copy, Debug)]
enum LastCtrl {
    None,
    Quad(Point),
    Cubic(Point),
}

pub(crate) fn parse_path(input: &str) -> ShapeshiftResult<Path> {
    let mut b = PathBuilder::new();
    let mut last_ctrl = LastCtrl::None;
    let mut after_close = false;

    for (index, segment) in PathParser::from(input).enumerate() {
        let segment = segment.map_err(|e| ShapeshiftError::path_parse(e.to_string()))?;
        check_finite(&segment, index)?;

        let is_close = matches!(segment, PathSegment::ClosePath { .. });
        if after_close && is_close {
            // Z directly after Z has nothing left to close.
            continue;
        }
        if after_close && !matches!(segment, PathSegment::MoveTo { .. }) {
            // Drawing after Z continues from the closed sub-path's start.
            let restart = b.sub_path_start().unwrap_or(Point::ORIGIN);
            b = b.move_to(restart);
        }
        after_close = is_close;

        let current = b.current_point().unwrap_or(Point::ORIGIN);
        let at = |abs: bool, x: f64, y: f64| {
            if abs {
                Point::new(x, y)
            } else {
                current + Vec2::new(x, y)
            }
        };

        let mut next_ctrl = LastCtrl::None;
        b = match segment {
            PathSegment::MoveTo { abs, x, y } => b.move_to(at(abs, x, y)),
            PathSegment::LineTo { abs, x, y } => b.line_to(at(abs, x, y)),
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { current.x + x };
                b.line_to(Point::new(x, current.y))
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { current.y + y };
                b.line_to(Point::new(current.x, y))
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = at(abs, x1, y1);
                next_ctrl = LastCtrl::Quad(ctrl);
                b.quad_to(ctrl, at(abs, x, y))
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = match last_ctrl {
                    LastCtrl::Quad(prev) => reflect(prev, current),
                    _ => current,
                };
                next_ctrl = LastCtrl::Quad(ctrl);
                b.quad_to(ctrl, at(abs, x, y))
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let ctrl2 = at(abs, x2, y2);
                next_ctrl = LastCtrl::Cubic(ctrl2);
                b.cubic_to(at(abs, x1, y1), ctrl2, at(abs, x, y))
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl1 = match last_ctrl {
                    LastCtrl::Cubic(prev) => reflect(prev, current),
                    _ => current,
                };
                let ctrl2 = at(abs, x2, y2);
                next_ctrl = LastCtrl::Cubic(ctrl2);
                b.cubic_to(ctrl1, ctrl2, at(abs, x, y))
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => b.arc_to(rx, ry, x_axis_rotation, large_arc, sweep, at(abs, x, y)),
            PathSegment::ClosePath { .. } => b.close(),
        };
        last_ctrl = next_ctrl;
    }

    b.build()
}

fn reflect(ctrl: Point, about: Point) -> Point {
    about + (about - ctrl)
}

fn check_finite(segment: &PathSegment, index: usize) -> ShapeshiftResult<()> {
    let numbers: &[f64] = match *segment {
        PathSegment::MoveTo { x, y, .. }
        | PathSegment::LineTo { x, y, .. }
        | PathSegment::SmoothQuadratic { x, y, .. } => &[x, y],
        PathSegment::HorizontalLineTo { x, .. } => &[x],
        PathSegment::VerticalLineTo { y, .. } => &[y],
        PathSegment::Quadratic { x1, y1, x, y, .. } => &[x1, y1, x, y],
        PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => &[x2, y2, x, y],
        PathSegment::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            ..
        } => &[x1, y1, x2, y2, x, y],
        PathSegment::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            x,
            y,
            ..
        } => &[rx, ry, x_axis_rotation, x, y],
        PathSegment::ClosePath { .. } => &[],
    };
    if numbers.iter().all(|n| n.is_finite()) {
        Ok(())
    } else {
        Err(ShapeshiftError::path_parse(format!(
            "segment {index} has a number out of range"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
