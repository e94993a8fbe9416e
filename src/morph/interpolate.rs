use crate::animation::interpolator::Interpolator;
use crate::foundation::core::Point;
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::foundation::math::{lerp, lerp_point};
use crate::morph::check::is_morphable;
use crate::path::command::{ArcParams, Command, CommandKind, Segment};
use crate::path::model::Path;

/// Point-wise linear interpolation between two morphable paths.
///
/// `t = 0` reproduces `start`, `t = 1` reproduces `end`. Fractions outside `[0, 1]` are
/// allowed and extrapolate linearly, which is what overshooting timing curves rely on.
pub fn interpolate(start: &Path, end: &Path, t: f64) -> ShapeshiftResult<Path> {
    if !is_morphable(start, end) {
        tracing::debug!(
            start = start.to_path_string(),
            end = end.to_path_string(),
            "interpolate called on unmorphable pair"
        );
        return Err(ShapeshiftError::not_morphable(
            "attempt to interpolate two unmorphable paths",
        ));
    }
    Ok(interpolate_unchecked(start, end, t))
}

fn interpolate_unchecked(start: &Path, end: &Path, t: f64) -> Path {
    let mut commands: Vec<Command> = Vec::with_capacity(start.command_count());
    let mut move_point = None;
    for (a, b) in start.commands().iter().zip(end.commands()) {
        let prev_end = commands.last().map(Command::end);
        let cmd = match a.kind() {
            CommandKind::MoveTo => {
                let cmd = lerp_command(a, b, t, None);
                move_point = Some(cmd.end());
                cmd
            }
            // Chain from the previous interpolated end so continuity holds exactly.
            CommandKind::ClosePath => {
                let cmd = lerp_command(a, b, t, prev_end);
                Command::new(
                    *cmd.segment(),
                    cmd.start(),
                    move_point.unwrap_or(cmd.end()),
                    cmd.is_split(),
                )
            }
            _ => lerp_command(a, b, t, prev_end),
        };
        commands.push(cmd);
    }
    Path::new_unchecked(commands)
}

fn lerp_command(a: &Command, b: &Command, t: f64, start: Option<Point>) -> Command {
    let segment = match (*a.segment(), *b.segment()) {
        (Segment::QuadTo { ctrl: c0 }, Segment::QuadTo { ctrl: c1 }) => Segment::QuadTo {
            ctrl: lerp_point(c0, c1, t),
        },
        (
            Segment::CubicTo {
                ctrl1: a1,
                ctrl2: a2,
            },
            Segment::CubicTo {
                ctrl1: b1,
                ctrl2: b2,
            },
        ) => Segment::CubicTo {
            ctrl1: lerp_point(a1, b1, t),
            ctrl2: lerp_point(a2, b2, t),
        },
        (Segment::ArcTo(x), Segment::ArcTo(y)) => {
            let flags = if t < 0.5 { x } else { y };
            Segment::ArcTo(ArcParams {
                rx: lerp(x.rx, y.rx, t),
                ry: lerp(x.ry, y.ry, t),
                x_axis_rotation: lerp(x.x_axis_rotation, y.x_axis_rotation, t),
                large_arc: flags.large_arc,
                sweep: flags.sweep,
            })
        }
        (segment, _) => segment,
    };
    let start = match (a.start(), b.start()) {
        (Some(p0), Some(p1)) => Some(start.unwrap_or_else(|| lerp_point(p0, p1, t))),
        _ => None,
    };
    Command::new(
        segment,
        start,
        lerp_point(a.end(), b.end(), t),
        a.is_split(),
    )
}

/// A (start, end) pair already known to be morphable.
///
/// Built once per edit; each animation tick then calls [`Morph::at`] without re-checking.
#[derive(Clone, Debug)]
pub struct Morph {
    start: Path,
    end: Path,
}

impl Morph {
    pub fn new(start: Path, end: Path) -> ShapeshiftResult<Self> {
        if !is_morphable(&start, &end) {
            return Err(ShapeshiftError::not_morphable(
                "start and end paths differ in command structure",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    pub fn end(&self) -> &Path {
        &self.end
    }

    pub fn at(&self, t: f64) -> Path {
        interpolate_unchecked(&self.start, &self.end, t)
    }

    /// Eases `progress` (clock time as a `[0, 1]` fraction) before interpolating.
    pub fn sample(&self, progress: f64, curve: Interpolator) -> Path {
        self.at(curve.apply(progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
