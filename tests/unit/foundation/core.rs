use super::*;

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn rotation_is_applied_around_pivot() {
    let t = Transform2D {
        rotation_deg: 90.0,
        pivot: Vec2::new(12.0, 12.0),
        ..Transform2D::default()
    };
    let p = t.to_affine() * Point::new(12.0, 0.0);
    assert!((p.x - 24.0).abs() < 1e-9);
    assert!((p.y - 12.0).abs() < 1e-9);

    let pivot = t.to_affine() * Point::new(12.0, 12.0);
    assert!((pivot.x - 12.0).abs() < 1e-9);
    assert!((pivot.y - 12.0).abs() < 1e-9);
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let t: Transform2D = serde_json::from_str(r#"{"rotation_deg": 45.0}"#).unwrap();
    assert_eq!(t.rotation_deg, 45.0);
    assert_eq!(t.scale, Vec2::new(1.0, 1.0));
    assert_eq!(t.translate, Vec2::ZERO);
}
