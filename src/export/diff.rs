//! Schema-agnostic comparison of start and end layer snapshots.

use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::layer::model::{GroupLayer, PathLayer, VectorLayer};
use crate::morph::check::is_morphable;
use crate::path::model::Path;

/// The layers of one side that take part in an export.
#[derive(Clone, Copy, Debug)]
pub struct LayerSnapshot<'a> {
    pub vector: &'a VectorLayer,
    pub rotation: Option<&'a GroupLayer>,
    pub path: Option<&'a PathLayer>,
}

impl<'a> LayerSnapshot<'a> {
    /// Looks up the active path layer and optional rotation group by id.
    ///
    /// Ids that are missing, or that name a layer of another kind, resolve to `None`.
    pub fn resolve(vector: &'a VectorLayer, path_id: &str, rotation_id: Option<&str>) -> Self {
        Self {
            vector,
            rotation: rotation_id.and_then(|id| vector.find_group_layer(id)),
            path: vector.find_path_layer(path_id),
        }
    }
}

/// A from/to pair for one property.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Change<T> {
    pub from: T,
    pub to: T,
}

impl<T: PartialEq> Change<T> {
    fn if_different(from: T, to: T) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }
}

/// One changed animatable property.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum PropertyChange {
    Alpha(Change<f64>),
    Rotation(Change<f64>),
    PathData(Change<Path>),
    FillColor(Change<String>),
    StrokeColor(Change<String>),
    FillAlpha(Change<f64>),
    StrokeAlpha(Change<f64>),
    StrokeWidth(Change<f64>),
}

/// Which snapshot layer a [`LayerDiff`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DiffLayer {
    Vector,
    Rotation,
    Path,
}

/// Changed properties of one layer, in emission order. Never empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerDiff {
    pub layer_id: String,
    pub layer: DiffLayer,
    pub changes: Vec<PropertyChange>,
}

/// Compares two snapshots.
///
/// Output order is root layer, rotation group, path layer. The path layer is always present
/// and always carries its path data first.
pub fn diff_snapshots(
    start: &LayerSnapshot<'_>,
    end: &LayerSnapshot<'_>,
) -> ShapeshiftResult<Vec<LayerDiff>> {
    let (Some(start_path), Some(end_path)) = (start.path, end.path) else {
        return Err(ShapeshiftError::incompatible_layers(format!(
            "a path layer is required on both sides (start: {}, end: {})",
            if start.path.is_some() { "present" } else { "missing" },
            if end.path.is_some() { "present" } else { "missing" },
        )));
    };

    let mut diffs = Vec::with_capacity(3);
    if let Some(alpha) = Change::if_different(start.vector.alpha, end.vector.alpha) {
        diffs.push(LayerDiff {
            layer_id: start.vector.id.clone(),
            layer: DiffLayer::Vector,
            changes: vec![PropertyChange::Alpha(alpha)],
        });
    }
    if let Some(rotation) = rotation_change(start.rotation, end.rotation) {
        diffs.push(rotation);
    }
    diffs.push(path_diff(start_path, end_path));
    Ok(diffs)
}

fn rotation_change(start: Option<&GroupLayer>, end: Option<&GroupLayer>) -> Option<LayerDiff> {
    let (start, end) = (start?, end?);
    let change = Change::if_different(start.rotation(), end.rotation())?;
    Some(LayerDiff {
        layer_id: start.id.clone(),
        layer: DiffLayer::Rotation,
        changes: vec![PropertyChange::Rotation(change)],
    })
}

fn both_defined<T: Clone + PartialEq>(from: &Option<T>, to: &Option<T>) -> Option<Change<T>> {
    match (from, to) {
        (Some(from), Some(to)) => Change::if_different(from.clone(), to.clone()),
        _ => None,
    }
}

fn path_diff(start: &PathLayer, end: &PathLayer) -> LayerDiff {
    if !is_morphable(&start.path_data, &end.path_data) {
        tracing::warn!(
            layer = %start.id,
            "exporting path data that is not morphable; players may reject it"
        );
    }
    let mut changes = vec![PropertyChange::PathData(Change {
        from: start.path_data.clone(),
        to: end.path_data.clone(),
    })];
    changes.extend(both_defined(&start.fill_color, &end.fill_color).map(PropertyChange::FillColor));
    changes.extend(
        both_defined(&start.stroke_color, &end.stroke_color).map(PropertyChange::StrokeColor),
    );
    changes.extend(both_defined(&start.fill_alpha, &end.fill_alpha).map(PropertyChange::FillAlpha));
    changes.extend(
        both_defined(&start.stroke_alpha, &end.stroke_alpha).map(PropertyChange::StrokeAlpha),
    );
    changes.extend(
        both_defined(&start.stroke_width, &end.stroke_width).map(PropertyChange::StrokeWidth),
    );
    LayerDiff {
        layer_id: start.id.clone(),
        layer: DiffLayer::Path,
        changes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/diff.rs"]
mod tests;
