//! CSS-animatable SVG descriptors.

use crate::export::color::android_to_css_color;
use crate::export::diff::{Change, LayerDiff, PropertyChange};
use crate::foundation::math::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SvgPropertyName {
    Opacity,
    Transform,
    D,
    Fill,
    Stroke,
    FillOpacity,
    StrokeOpacity,
    StrokeWidth,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgAnimation {
    pub property_name: SvgPropertyName,
    pub value_from: String,
    pub value_to: String,
    pub duration: u64,
    /// CSS timing function.
    pub interpolator: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgTarget {
    pub layer_id: String,
    pub animations: Vec<SvgAnimation>,
}

fn map<T>(c: &Change<T>, f: impl Fn(&T) -> String) -> (String, String) {
    (f(&c.from), f(&c.to))
}

fn encode(change: &PropertyChange) -> (SvgPropertyName, (String, String)) {
    use SvgPropertyName as N;
    let num = |v: &f64| fmt_num(*v);
    let color = |v: &String| android_to_css_color(v);
    match change {
        PropertyChange::Alpha(c) => (N::Opacity, map(c, num)),
        PropertyChange::Rotation(c) => (
            N::Transform,
            map(c, |v| format!("rotate({})", fmt_num(*v))),
        ),
        PropertyChange::PathData(c) => (
            N::D,
            map(c, |p| format!("path('{}')", p.to_path_string())),
        ),
        PropertyChange::FillColor(c) => (N::Fill, map(c, color)),
        PropertyChange::StrokeColor(c) => (N::Stroke, map(c, color)),
        PropertyChange::FillAlpha(c) => (N::FillOpacity, map(c, num)),
        PropertyChange::StrokeAlpha(c) => (N::StrokeOpacity, map(c, num)),
        PropertyChange::StrokeWidth(c) => (N::StrokeWidth, map(c, num)),
    }
}

/// Maps diffs onto SVG targets, one per diff, preserving order.
pub fn svg_targets(diffs: &[LayerDiff], duration: u64, interpolator: &str) -> Vec<SvgTarget> {
    diffs
        .iter()
        .map(|diff| SvgTarget {
            layer_id: diff.layer_id.clone(),
            animations: diff
                .changes
                .iter()
                .map(|change| {
                    let (property_name, (value_from, value_to)) = encode(change);
                    SvgAnimation {
                        property_name,
                        value_from,
                        value_to,
                        duration,
                        interpolator: interpolator.to_owned(),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
