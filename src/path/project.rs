//! Closest-point projection onto a path, and splitting a path at a projection.

use std::cmp::Ordering;

use crate::foundation::core::{CubicBez, ParamCurve, Point, QuadBez};
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::foundation::math::lerp_point;
use crate::path::command::{ArcParams, Command, CommandKind, Segment};
use crate::path::model::Path;

/// Equally spaced curve parameters sampled before local refinement.
pub const PROJECTION_SAMPLES: usize = 64;

/// Interval-halving rounds around the best sample. Each round halves the parameter error.
pub const PROJECTION_REFINE_STEPS: usize = 24;

/// Squared distances closer than this are ties; ties keep the lower command position.
pub const TIE_EPSILON: f64 = 1e-9;

/// Closest point on a path to a query point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Projection {
    pub sub_path_index: usize,
    /// Index within the sub-path; 0 is the `MoveTo`.
    pub command_index: usize,
    /// Local curve parameter in `[0, 1]`.
    pub t: f64,
    pub point: Point,
    pub distance_sq: f64,
}

/// Nearest point on a single command as `(t, point, distance_sq)`.
///
/// `MoveTo` commands draw nothing and yield `None`.
pub fn project_command(cmd: &Command, p: Point) -> Option<(f64, Point, f64)> {
    let start = cmd.start()?;
    match cmd.kind() {
        CommandKind::MoveTo => None,
        CommandKind::LineTo | CommandKind::ClosePath => {
            let d = cmd.end() - start;
            let len2 = d.hypot2();
            let t = if len2 == 0.0 {
                0.0
            } else {
                ((p - start).dot(d) / len2).clamp(0.0, 1.0)
            };
            let q = lerp_point(start, cmd.end(), t);
            Some((t, q, q.distance_squared(p)))
        }
        CommandKind::QuadTo | CommandKind::CubicTo | CommandKind::ArcTo => {
            Some(nearest_sampled(cmd, p))
        }
    }
}

fn nearest_sampled(cmd: &Command, p: Point) -> (f64, Point, f64) {
    let dist = |t: f64| cmd.eval(t).distance_squared(p);

    let n = PROJECTION_SAMPLES as f64;
    let (mut best_t, mut best_d) = (0.0, dist(0.0));
    for i in 1..=PROJECTION_SAMPLES {
        let t = i as f64 / n;
        let d = dist(t);
        if d < best_d {
            best_t = t;
            best_d = d;
        }
    }

    let mut h = 1.0 / n;
    for _ in 0..PROJECTION_REFINE_STEPS {
        h /= 2.0;
        let center = best_t;
        for t in [center - h, center + h] {
            let t = t.clamp(0.0, 1.0);
            let d = dist(t);
            if d < best_d {
                best_t = t;
                best_d = d;
            }
        }
    }
    (best_t, cmd.eval(best_t), best_d)
}

/// Globally closest point across every command of every sub-path.
pub fn project(path: &Path, p: Point) -> Option<Projection> {
    let mut best: Option<Projection> = None;
    for (sub_path_index, sub) in path.sub_paths().enumerate() {
        for (command_index, cmd) in sub.commands().iter().enumerate() {
            let Some((t, point, distance_sq)) = project_command(cmd, p) else {
                continue;
            };
            let better = best
                .map(|b| distance_sq < b.distance_sq - TIE_EPSILON)
                .unwrap_or(true);
            if better {
                best = Some(Projection {
                    sub_path_index,
                    command_index,
                    t,
                    point,
                    distance_sq,
                });
            }
        }
    }
    best
}

/// Splits `cmd` at `t` into two commands that retrace it exactly.
///
/// The first half ends at the split point and is flagged as a split; the second half keeps the
/// original flag.
pub fn split_command(cmd: &Command, t: f64) -> ShapeshiftResult<(Command, Command)> {
    if cmd.kind() == CommandKind::MoveTo {
        return Err(ShapeshiftError::non_splittable("MoveTo cannot be split"));
    }
    if cmd.is_degenerate() {
        return Err(ShapeshiftError::non_splittable(format!(
            "zero-length {:?} cannot be split",
            cmd.kind()
        )));
    }
    if !(t > 0.0 && t < 1.0) {
        return Err(ShapeshiftError::non_splittable(format!(
            "split parameter {t} lies on a command endpoint"
        )));
    }
    let Some(p0) = cmd.start() else {
        return Err(ShapeshiftError::non_splittable("command has no start point"));
    };
    let p3 = cmd.end();

    let (first, second, mid) = match *cmd.segment() {
        Segment::MoveTo => {
            return Err(ShapeshiftError::non_splittable("MoveTo cannot be split"));
        }
        Segment::LineTo | Segment::ClosePath => {
            (Segment::LineTo, *cmd.segment(), lerp_point(p0, p3, t))
        }
        Segment::QuadTo { ctrl } => {
            let q = QuadBez::new(p0, ctrl, p3);
            let (a, b) = (q.subsegment(0.0..t), q.subsegment(t..1.0));
            (
                Segment::QuadTo { ctrl: a.p1 },
                Segment::QuadTo { ctrl: b.p1 },
                q.eval(t),
            )
        }
        Segment::CubicTo { ctrl1, ctrl2 } => {
            let c = CubicBez::new(p0, ctrl1, ctrl2, p3);
            let (a, b) = (c.subsegment(0.0..t), c.subsegment(t..1.0));
            (
                Segment::CubicTo {
                    ctrl1: a.p1,
                    ctrl2: a.p2,
                },
                Segment::CubicTo {
                    ctrl1: b.p1,
                    ctrl2: b.p2,
                },
                c.eval(t),
            )
        }
        Segment::ArcTo(params) => match cmd.center_arc() {
            Some(arc) => {
                let sub = |fraction: f64| {
                    Segment::ArcTo(ArcParams {
                        rx: arc.rx,
                        ry: arc.ry,
                        large_arc: (arc.delta_theta * fraction).abs() > std::f64::consts::PI,
                        ..params
                    })
                };
                (sub(t), sub(1.0 - t), arc.eval(t))
            }
            // Zero radii draw a straight line; both halves stay straight.
            None => (
                Segment::ArcTo(params),
                Segment::ArcTo(params),
                lerp_point(p0, p3, t),
            ),
        },
    };

    Ok((
        Command::new(first, Some(p0), mid, true),
        Command::new(second, Some(mid), p3, cmd.is_split()),
    ))
}

/// Returns a new path with the projected command split in two at the projection.
pub fn split(path: &Path, projection: &Projection) -> ShapeshiftResult<Path> {
    let cmd = path
        .command(projection.sub_path_index, projection.command_index)
        .ok_or_else(|| {
            ShapeshiftError::non_splittable(format!(
                "no command at sub-path {} index {}",
                projection.sub_path_index, projection.command_index
            ))
        })?;
    let (a, b) = split_command(cmd, projection.t)?;
    tracing::trace!(
        sub_path = projection.sub_path_index,
        command = projection.command_index,
        t = projection.t,
        "split command"
    );
    path.replace_command(
        projection.sub_path_index,
        projection.command_index,
        vec![a, b],
    )
}

/// Applies several splits to the same original path.
///
/// Splits run from the highest (sub-path, command) position down so earlier indices stay valid.
/// Several splits of one command are applied from the largest `t` down, re-parameterized onto
/// the shrinking leading half.
pub fn split_all(path: &Path, projections: &[Projection]) -> ShapeshiftResult<Path> {
    let mut ops = projections.to_vec();
    ops.sort_by(|a, b| {
        (b.sub_path_index, b.command_index)
            .cmp(&(a.sub_path_index, a.command_index))
            .then_with(|| b.t.partial_cmp(&a.t).unwrap_or(Ordering::Equal))
    });

    let mut out = path.clone();
    let mut last: Option<Projection> = None;
    for op in ops {
        let mut local = op;
        if let Some(prev) = last
            && (prev.sub_path_index, prev.command_index) == (op.sub_path_index, op.command_index)
        {
            local.t = op.t / prev.t;
        }
        out = split(&out, &local)?;
        last = Some(op);
    }
    Ok(out)
}

impl Path {
    /// See [`project`].
    pub fn project(&self, p: Point) -> Option<Projection> {
        project(self, p)
    }

    /// See [`split`].
    pub fn split_at(&self, projection: &Projection) -> ShapeshiftResult<Path> {
        split(self, projection)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/project.rs"]
mod tests;
