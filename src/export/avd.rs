//! Animated-vector-drawable descriptors.

use crate::export::diff::{Change, LayerDiff, PropertyChange};
use crate::foundation::math::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvdPropertyName {
    Alpha,
    Rotation,
    PathData,
    FillColor,
    StrokeColor,
    FillAlpha,
    StrokeAlpha,
    StrokeWidth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvdValueType {
    FloatType,
    PathType,
    ColorType,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvdAnimation {
    pub property_name: AvdPropertyName,
    pub value_from: String,
    pub value_to: String,
    /// Milliseconds.
    pub duration: u64,
    /// Android interpolator resource reference.
    pub interpolator: String,
    pub value_type: AvdValueType,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AvdTarget {
    /// Id of the animated layer.
    pub name: String,
    pub animations: Vec<AvdAnimation>,
}

fn encode(change: &PropertyChange) -> (AvdPropertyName, String, String, AvdValueType) {
    use AvdPropertyName as N;
    use AvdValueType as V;
    let float = |n: N, c: &Change<f64>| {
        (n, fmt_num(c.from), fmt_num(c.to), V::FloatType)
    };
    match change {
        PropertyChange::Alpha(c) => float(N::Alpha, c),
        PropertyChange::Rotation(c) => float(N::Rotation, c),
        PropertyChange::PathData(c) => (
            N::PathData,
            c.from.to_path_string().to_owned(),
            c.to.to_path_string().to_owned(),
            V::PathType,
        ),
        PropertyChange::FillColor(c) => (N::FillColor, c.from.clone(), c.to.clone(), V::ColorType),
        PropertyChange::StrokeColor(c) => {
            (N::StrokeColor, c.from.clone(), c.to.clone(), V::ColorType)
        }
        PropertyChange::FillAlpha(c) => float(N::FillAlpha, c),
        PropertyChange::StrokeAlpha(c) => float(N::StrokeAlpha, c),
        PropertyChange::StrokeWidth(c) => float(N::StrokeWidth, c),
    }
}

/// Maps diffs onto AVD targets, one per diff, preserving order.
pub fn avd_targets(diffs: &[LayerDiff], duration: u64, interpolator: &str) -> Vec<AvdTarget> {
    diffs
        .iter()
        .map(|diff| AvdTarget {
            name: diff.layer_id.clone(),
            animations: diff
                .changes
                .iter()
                .map(|change| {
                    let (property_name, value_from, value_to, value_type) = encode(change);
                    AvdAnimation {
                        property_name,
                        value_from,
                        value_to,
                        duration,
                        interpolator: interpolator.to_owned(),
                        value_type,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/export/avd.rs"]
mod tests;
