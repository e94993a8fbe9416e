use super::*;

fn cubic() -> Command {
    Command::new(
        Segment::CubicTo {
            ctrl1: Point::new(0.0, 10.0),
            ctrl2: Point::new(10.0, 10.0),
        },
        Some(Point::new(0.0, 0.0)),
        Point::new(10.0, 0.0),
        false,
    )
}

#[test]
fn points_follow_kind_point_count() {
    let mv = Command::new(Segment::MoveTo, None, Point::new(1.0, 2.0), false);
    assert_eq!(mv.points(), vec![None, Some(Point::new(1.0, 2.0))]);
    assert_eq!(mv.points().len(), CommandKind::MoveTo.point_count());

    let c = cubic();
    assert_eq!(c.points().len(), CommandKind::CubicTo.point_count());
    assert_eq!(c.points()[1], Some(Point::new(0.0, 10.0)));
}

#[test]
fn eval_hits_endpoints_exactly() {
    let c = cubic();
    assert_eq!(c.eval(0.0), Point::new(0.0, 0.0));
    assert_eq!(c.eval(1.0), Point::new(10.0, 0.0));
    let mid = c.eval(0.5);
    assert!((mid.x - 5.0).abs() < 1e-12);
    assert!((mid.y - 7.5).abs() < 1e-12);
}

#[test]
fn line_length_is_closed_form() {
    let line = Command::new(
        Segment::LineTo,
        Some(Point::new(0.0, 0.0)),
        Point::new(3.0, 4.0),
        false,
    );
    assert_eq!(line.length(1), 5.0);
}

#[test]
fn sampled_length_of_straight_cubic_matches_chord() {
    let c = Command::new(
        Segment::CubicTo {
            ctrl1: Point::new(1.0, 0.0),
            ctrl2: Point::new(2.0, 0.0),
        },
        Some(Point::new(0.0, 0.0)),
        Point::new(3.0, 0.0),
        false,
    );
    assert!((c.length(100) - 3.0).abs() < 1e-9);
}

#[test]
fn degenerate_detection() {
    let p = Point::new(4.0, 4.0);
    assert!(Command::new(Segment::LineTo, Some(p), p, false).is_degenerate());
    assert!(Command::new(Segment::MoveTo, None, p, false).is_degenerate());
    assert!(!cubic().is_degenerate());
}

#[test]
fn path_string_fragments() {
    assert_eq!(cubic().to_path_string(), "C 0,10 10,10 10,0");
    let arc = Command::new(
        Segment::ArcTo(ArcParams {
            rx: 5.0,
            ry: 2.5,
            x_axis_rotation: 0.0,
            large_arc: true,
            sweep: false,
        }),
        Some(Point::new(0.0, 0.0)),
        Point::new(10.0, 0.0),
        false,
    );
    assert_eq!(arc.to_path_string(), "A 5,2.5 0 1 0 10,0");
    assert_eq!(arc.arc_descriptor().unwrap().end_x, 10.0);
    assert!(cubic().arc_descriptor().is_none());
}
