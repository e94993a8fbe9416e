use crate::foundation::core::{CubicBez, ParamCurve, Point, QuadBez};
use crate::foundation::math::{fmt_num, lerp_point};
use crate::path::arc::{ArcDescriptor, CenterArc};

/// Structural type of a draw command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    ClosePath,
    ArcTo,
}

impl CommandKind {
    pub fn svg_char(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::QuadTo => 'Q',
            Self::CubicTo => 'C',
            Self::ClosePath => 'Z',
            Self::ArcTo => 'A',
        }
    }

    /// Length of [`Command::points`] for this kind: start, controls, end.
    pub fn point_count(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo | Self::ClosePath | Self::ArcTo => 2,
            Self::QuadTo => 3,
            Self::CubicTo => 4,
        }
    }
}

/// Shape parameters of an `A` command, without its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Kind plus the kind-specific control data of a command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    MoveTo,
    LineTo,
    QuadTo { ctrl: Point },
    CubicTo { ctrl1: Point, ctrl2: Point },
    ClosePath,
    ArcTo(ArcParams),
}

impl Segment {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo => CommandKind::MoveTo,
            Self::LineTo => CommandKind::LineTo,
            Self::QuadTo { .. } => CommandKind::QuadTo,
            Self::CubicTo { .. } => CommandKind::CubicTo,
            Self::ClosePath => CommandKind::ClosePath,
            Self::ArcTo(_) => CommandKind::ArcTo,
        }
    }
}

/// A single immutable draw command.
///
/// Commands are only built inside the path model; everything else receives them from a
/// [`Path`](crate::Path).
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    segment: Segment,
    start: Option<Point>,
    end: Point,
    is_split: bool,
}

impl Command {
    pub(crate) fn new(segment: Segment, start: Option<Point>, end: Point, is_split: bool) -> Self {
        Self {
            segment,
            start,
            end,
            is_split,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.segment.kind()
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// End of the previous command; `None` for a `MoveTo`.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// True when this command was created by a user-initiated split.
    pub fn is_split(&self) -> bool {
        self.is_split
    }

    /// `[start, controls..., end]`.
    pub fn points(&self) -> Vec<Option<Point>> {
        let mut out = Vec::with_capacity(self.kind().point_count());
        out.push(self.start);
        match self.segment {
            Segment::QuadTo { ctrl } => out.push(Some(ctrl)),
            Segment::CubicTo { ctrl1, ctrl2 } => {
                out.push(Some(ctrl1));
                out.push(Some(ctrl2));
            }
            Segment::MoveTo | Segment::LineTo | Segment::ClosePath | Segment::ArcTo(_) => {}
        }
        out.push(Some(self.end));
        out
    }

    pub(crate) fn with_split(mut self, is_split: bool) -> Self {
        self.is_split = is_split;
        self
    }

    /// Arc descriptor for an `ArcTo`, `None` for every other kind.
    pub fn arc_descriptor(&self) -> Option<ArcDescriptor> {
        let Segment::ArcTo(arc) = self.segment else {
            return None;
        };
        let start = self.start.unwrap_or(self.end);
        Some(ArcDescriptor {
            start_x: start.x,
            start_y: start.y,
            rx: arc.rx,
            ry: arc.ry,
            x_axis_rotation_degrees: arc.x_axis_rotation,
            large_arc: arc.large_arc,
            sweep: arc.sweep,
            end_x: self.end.x,
            end_y: self.end.y,
        })
    }

    /// Point at curve parameter `t`; a `MoveTo` evaluates to its end point.
    pub fn eval(&self, t: f64) -> Point {
        let Some(p0) = self.start else {
            return self.end;
        };
        if t <= 0.0 {
            return p0;
        }
        if t >= 1.0 {
            return self.end;
        }
        match self.segment {
            Segment::MoveTo => self.end,
            Segment::LineTo | Segment::ClosePath => lerp_point(p0, self.end, t),
            Segment::QuadTo { ctrl } => QuadBez::new(p0, ctrl, self.end).eval(t),
            Segment::CubicTo { ctrl1, ctrl2 } => CubicBez::new(p0, ctrl1, ctrl2, self.end).eval(t),
            Segment::ArcTo(_) => match self.center_arc() {
                Some(arc) => arc.eval(t),
                None => lerp_point(p0, self.end, t),
            },
        }
    }

    pub(crate) fn center_arc(&self) -> Option<CenterArc> {
        self.arc_descriptor()
            .and_then(|d| CenterArc::from_descriptor(&d))
    }

    /// True when every point of the command coincides, so it draws nothing.
    pub fn is_degenerate(&self) -> bool {
        let Some(start) = self.start else {
            return true;
        };
        self.points()
            .into_iter()
            .flatten()
            .all(|p| p == start)
    }

    /// Arc length; `samples` is the polyline resolution used for curved kinds.
    pub fn length(&self, samples: usize) -> f64 {
        let Some(p0) = self.start else {
            return 0.0;
        };
        match self.segment {
            Segment::MoveTo => 0.0,
            Segment::LineTo | Segment::ClosePath => p0.distance(self.end),
            Segment::QuadTo { .. } | Segment::CubicTo { .. } | Segment::ArcTo(_) => {
                let n = samples.max(1);
                let mut prev = p0;
                let mut total = 0.0;
                for i in 1..=n {
                    let p = self.eval(i as f64 / n as f64);
                    total += prev.distance(p);
                    prev = p;
                }
                total
            }
        }
    }

    /// Canonical path-string fragment, e.g. `C 1,2 3,4 5,6`.
    pub fn to_path_string(&self) -> String {
        fn pt(p: Point) -> String {
            format!("{},{}", fmt_num(p.x), fmt_num(p.y))
        }

        match self.segment {
            Segment::MoveTo => format!("M {}", pt(self.end)),
            Segment::LineTo => format!("L {}", pt(self.end)),
            Segment::QuadTo { ctrl } => format!("Q {} {}", pt(ctrl), pt(self.end)),
            Segment::CubicTo { ctrl1, ctrl2 } => {
                format!("C {} {} {}", pt(ctrl1), pt(ctrl2), pt(self.end))
            }
            Segment::ClosePath => "Z".to_owned(),
            Segment::ArcTo(arc) => format!(
                "A {},{} {} {} {} {}",
                fmt_num(arc.rx),
                fmt_num(arc.ry),
                fmt_num(arc.x_axis_rotation),
                u8::from(arc.large_arc),
                u8::from(arc.sweep),
                pt(self.end)
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
