use super::*;
use crate::export::diff::{Change, DiffLayer};
use crate::path::model::Path;

fn diffs() -> Vec<LayerDiff> {
    vec![
        LayerDiff {
            layer_id: "vector".to_owned(),
            layer: DiffLayer::Vector,
            changes: vec![PropertyChange::Alpha(Change { from: 1.0, to: 0.5 })],
        },
        LayerDiff {
            layer_id: "shape".to_owned(),
            layer: DiffLayer::Path,
            changes: vec![
                PropertyChange::PathData(Change {
                    from: Path::parse("M 0,0 L 10,0").unwrap(),
                    to: Path::parse("M 0,0 L 0,10").unwrap(),
                }),
                PropertyChange::StrokeColor(Change {
                    from: "#FF000000".to_owned(),
                    to: "#80FFFFFF".to_owned(),
                }),
            ],
        },
    ]
}

#[test]
fn values_are_raw_and_typed() {
    let targets = avd_targets(&diffs(), 300, "@android:interpolator/fast_out_slow_in");
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].name, "vector");
    let alpha = &targets[0].animations[0];
    assert_eq!(alpha.property_name, AvdPropertyName::Alpha);
    assert_eq!((alpha.value_from.as_str(), alpha.value_to.as_str()), ("1", "0.5"));
    assert_eq!(alpha.value_type, AvdValueType::FloatType);

    let path = &targets[1].animations[0];
    assert_eq!(path.property_name, AvdPropertyName::PathData);
    assert_eq!(path.value_from, "M 0,0 L 10,0");
    assert_eq!(path.value_type, AvdValueType::PathType);

    let stroke = &targets[1].animations[1];
    assert_eq!(stroke.value_to, "#80FFFFFF");
    assert_eq!(stroke.value_type, AvdValueType::ColorType);
}

#[test]
fn json_uses_android_attribute_names() {
    let targets = avd_targets(&diffs(), 450, "@android:anim/linear_interpolator");
    let json = serde_json::to_value(&targets[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "vector",
            "animations": [{
                "propertyName": "alpha",
                "valueFrom": "1",
                "valueTo": "0.5",
                "duration": 450,
                "interpolator": "@android:anim/linear_interpolator",
                "valueType": "floatType"
            }]
        })
    );
    let path = serde_json::to_value(&targets[1].animations[0]).unwrap();
    assert_eq!(path["propertyName"], "pathData");
    assert_eq!(path["valueType"], "pathType");
}
