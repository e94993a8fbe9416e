use super::*;

fn desc(rx: f64, ry: f64, large_arc: bool, sweep: bool, end: (f64, f64)) -> ArcDescriptor {
    ArcDescriptor {
        start_x: 0.0,
        start_y: 0.0,
        rx,
        ry,
        x_axis_rotation_degrees: 0.0,
        large_arc,
        sweep,
        end_x: end.0,
        end_y: end.1,
    }
}

fn assert_close(a: (f64, f64), b: (f64, f64)) {
    assert!(
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn coincident_endpoints_produce_nothing() {
    assert_eq!(
        arc_to_beziers(&desc(10.0, 10.0, false, true, (0.0, 0.0))),
        ArcConversion::Empty
    );
}

#[test]
fn zero_radius_degenerates_to_line_with_exact_end() {
    let out = arc_to_beziers(&desc(0.0, 10.0, false, true, (7.25, -3.5)));
    assert_eq!(
        out,
        ArcConversion::Line {
            end: Point::new(7.25, -3.5)
        }
    );
    let out = arc_to_beziers(&desc(10.0, 0.0, true, false, (1.0, 2.0)));
    assert!(matches!(out, ArcConversion::Line { end } if end == Point::new(1.0, 2.0)));
}

#[test]
fn semicircle_is_split_into_two_quarter_segments() {
    let ArcConversion::Curves(octets) = arc_to_beziers(&desc(10.0, 10.0, false, true, (20.0, 0.0)))
    else {
        panic!("expected curves");
    };
    assert_eq!(octets.len(), 2);
    assert_eq!((octets[0][0], octets[0][1]), (0.0, 0.0));
    assert_close((octets[0][6], octets[0][7]), (10.0, -10.0));
    assert_eq!((octets[1][0], octets[1][1]), (octets[0][6], octets[0][7]));
    assert_eq!((octets[1][6], octets[1][7]), (20.0, 0.0));
}

#[test]
fn quarter_circle_uses_standard_kappa() {
    let ArcConversion::Curves(octets) = arc_to_beziers(&ArcDescriptor {
        start_x: 1.0,
        start_y: 0.0,
        rx: 1.0,
        ry: 1.0,
        x_axis_rotation_degrees: 0.0,
        large_arc: false,
        sweep: true,
        end_x: 0.0,
        end_y: 1.0,
    }) else {
        panic!("expected curves");
    };
    assert_eq!(octets.len(), 1);
    let kappa = 4.0 / 3.0 * (std::f64::consts::FRAC_PI_8).tan();
    assert_close((octets[0][2], octets[0][3]), (1.0, kappa));
    assert_close((octets[0][4], octets[0][5]), (kappa, 1.0));
}

#[test]
fn undersized_radii_are_scaled_to_span_the_chord() {
    let arc = desc(1.0, 1.0, false, true, (20.0, 0.0));
    let center = CenterArc::from_descriptor(&arc).unwrap();
    assert!((center.rx - 10.0).abs() < 1e-9);
    assert_close((center.center.x, center.center.y), (10.0, 0.0));
    let mid = center.eval(0.5);
    assert!((mid.distance(center.center) - 10.0).abs() < 1e-9);
}

#[test]
fn large_arc_flag_selects_longer_sweep() {
    let small = CenterArc::from_descriptor(&desc(10.0, 10.0, false, true, (10.0, 10.0))).unwrap();
    let large = CenterArc::from_descriptor(&desc(10.0, 10.0, true, true, (10.0, 10.0))).unwrap();
    assert!(small.delta_theta.abs() < std::f64::consts::PI);
    assert!(large.delta_theta.abs() > std::f64::consts::PI);

    let ArcConversion::Curves(octets) = arc_to_beziers(&desc(10.0, 10.0, true, true, (10.0, 10.0)))
    else {
        panic!("expected curves");
    };
    assert_eq!(octets.len(), 3);
}

#[test]
fn center_arc_endpoints_match_descriptor() {
    let arc = ArcDescriptor {
        start_x: 3.0,
        start_y: 4.0,
        rx: 8.0,
        ry: 5.0,
        x_axis_rotation_degrees: 30.0,
        large_arc: true,
        sweep: false,
        end_x: 12.0,
        end_y: -1.0,
    };
    let center = CenterArc::from_descriptor(&arc).unwrap();
    let p0 = center.eval(0.0);
    let p1 = center.eval(1.0);
    assert_close((p0.x, p0.y), (3.0, 4.0));
    assert_close((p1.x, p1.y), (12.0, -1.0));
}

#[test]
fn vanishing_radius_collapses_to_line() {
    let arc = desc(1e-7, 10.0, false, true, (4.0, 3.0));
    assert!(CenterArc::from_descriptor(&arc).is_none());
    assert_eq!(
        arc_to_beziers(&arc),
        ArcConversion::Line {
            end: Point::new(4.0, 3.0)
        }
    );
}
