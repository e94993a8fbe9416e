use super::*;

fn path(s: &str) -> Path {
    Path::parse(s).unwrap()
}

fn assert_paths_close(a: &Path, b: &Path) {
    assert_eq!(a.command_count(), b.command_count());
    for (x, y) in a.commands().iter().zip(b.commands()) {
        assert_eq!(x.kind(), y.kind());
        for (p, q) in x.points().into_iter().zip(y.points()) {
            match (p, q) {
                (Some(p), Some(q)) => {
                    assert!((p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9, "{p:?} vs {q:?}");
                }
                (None, None) => {}
                other => panic!("point presence differs: {other:?}"),
            }
        }
    }
}

#[test]
fn endpoints_reproduce_inputs() {
    let a = path("M 0,0 C 0,10 10,10 10,0 Q 15,5 20,0 Z");
    let b = path("M 4,4 C 1,2 3,4 5,6 Q 7,8 9,10 Z");
    assert_paths_close(&interpolate(&a, &b, 0.0).unwrap(), &a);
    assert_paths_close(&interpolate(&a, &b, 1.0).unwrap(), &b);
}

#[test]
fn midpoint_of_simple_line() {
    let a = path("M 0,0 L 10,10");
    let b = path("M 0,0 L 0,0");
    let mid = interpolate(&a, &b, 0.5).unwrap();
    assert_eq!(mid.to_path_string(), "M 0,0 L 5,5");
    assert_eq!(mid.commands()[1].start(), Some(Point::new(0.0, 0.0)));
}

#[test]
fn kinds_and_sub_paths_are_preserved() {
    let a = path("M 0,0 L 1,1 Z M 5,5 Q 6,6 7,5");
    let b = path("M 2,2 L 3,1 Z M 9,9 Q 8,8 7,9");
    let mid = interpolate(&a, &b, 0.3).unwrap();
    assert_eq!(mid.sub_path_count(), 2);
    let kinds: Vec<_> = mid.commands().iter().map(Command::kind).collect();
    let expected: Vec<_> = a.commands().iter().map(Command::kind).collect();
    assert_eq!(kinds, expected);
    // ClosePath lands back on the interpolated move point.
    assert_eq!(mid.commands()[2].end(), mid.commands()[0].end());
}

#[test]
fn unmorphable_pair_is_rejected() {
    let a = path("M 0,0 L 1,1");
    let b = path("M 0,0 Q 1,1 2,2");
    let err = interpolate(&a, &b, 0.5).unwrap_err();
    assert!(matches!(err, ShapeshiftError::NotMorphable(_)));
    assert!(Morph::new(a, b).is_err());
}

#[test]
fn fractions_outside_unit_range_extrapolate() {
    let a = path("M 0,0 L 10,0");
    let b = path("M 0,0 L 20,0");
    assert_eq!(interpolate(&a, &b, 1.5).unwrap().to_path_string(), "M 0,0 L 25,0");
    assert_eq!(interpolate(&a, &b, -0.5).unwrap().to_path_string(), "M 0,0 L 5,0");
}

#[test]
fn arc_flags_switch_at_half() {
    let a = path("M 0,0 A 10,10 0 0 0 20,0");
    let b = path("M 0,0 A 20,30 90 1 1 20,0");
    let arc = |t: f64| match *interpolate(&a, &b, t).unwrap().commands()[1].segment() {
        Segment::ArcTo(p) => p,
        other => panic!("expected arc, got {other:?}"),
    };
    let early = arc(0.25);
    assert!(!early.large_arc && !early.sweep);
    assert_eq!(early.rx, 12.5);
    assert_eq!(early.x_axis_rotation, 22.5);
    let late = arc(0.5);
    assert!(late.large_arc && late.sweep);
    assert_eq!(late.ry, 20.0);
}

#[test]
fn split_flags_follow_start_side() {
    let a = path("M 0,0 L 8,0");
    let split = a.split_at(&a.project(Point::new(4.0, 1.0)).unwrap()).unwrap();
    let b = path("M 0,2 L 4,2 L 8,2");
    let mid = interpolate(&split, &b, 0.5).unwrap();
    assert!(mid.commands()[1].is_split());
    assert!(!mid.commands()[2].is_split());
    assert_eq!(mid.to_path_string(), "M 0,1 L 4,1 L 8,1");
}

#[test]
fn morph_samples_through_timing_curve() {
    let morph = Morph::new(path("M 0,0 L 10,0"), path("M 0,0 L 20,0")).unwrap();
    assert_eq!(morph.at(0.5).to_path_string(), "M 0,0 L 15,0");
    assert_eq!(
        morph.sample(0.5, Interpolator::Linear).to_path_string(),
        "M 0,0 L 15,0"
    );
    assert_eq!(morph.sample(0.0, Interpolator::FastOutSlowIn), *morph.start());
    assert_paths_close(&morph.sample(1.0, Interpolator::FastOutSlowIn), morph.end());
}
