use crate::foundation::core::Point;
use crate::foundation::error::ShapeshiftResult;
use crate::path::command::{ArcParams, Command, Segment};
use crate::path::model::Path;

/// Fluent absolute-coordinate path constructor.
///
/// Start points are chained automatically; validation happens once in [`PathBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    commands: Vec<Command>,
    current: Option<Point>,
    sub_start: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: impl Into<Point>) -> Self {
        let p = p.into();
        self.commands.push(Command::new(Segment::MoveTo, None, p, false));
        self.current = Some(p);
        self.sub_start = Some(p);
        self
    }

    pub fn line_to(self, p: impl Into<Point>) -> Self {
        self.push(Segment::LineTo, p.into())
    }

    pub fn quad_to(self, ctrl: impl Into<Point>, end: impl Into<Point>) -> Self {
        self.push(Segment::QuadTo { ctrl: ctrl.into() }, end.into())
    }

    pub fn cubic_to(
        self,
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.push(
            Segment::CubicTo {
                ctrl1: ctrl1.into(),
                ctrl2: ctrl2.into(),
            },
            end.into(),
        )
    }

    pub fn arc_to(
        self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: impl Into<Point>,
    ) -> Self {
        self.push(
            Segment::ArcTo(ArcParams {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
            }),
            end.into(),
        )
    }

    /// Closes the current sub-path back to its `MoveTo` point.
    pub fn close(self) -> Self {
        let end = self.sub_start.or(self.current).unwrap_or(Point::ORIGIN);
        self.push(Segment::ClosePath, end)
    }

    /// Marks the most recently added command as created by a split.
    pub fn split(mut self) -> Self {
        if let Some(last) = self.commands.pop() {
            self.commands.push(last.with_split(true));
        }
        self
    }

    pub(crate) fn current_point(&self) -> Option<Point> {
        self.current
    }

    pub(crate) fn sub_path_start(&self) -> Option<Point> {
        self.sub_start
    }

    pub fn build(self) -> ShapeshiftResult<Path> {
        Path::new(self.commands)
    }

    fn push(mut self, segment: Segment, end: Point) -> Self {
        self.commands
            .push(Command::new(segment, self.current, end, false));
        self.current = Some(end);
        self
    }
}
