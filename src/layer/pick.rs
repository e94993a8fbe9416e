//! Closest-point picking across every path layer of a tree.

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::ShapeshiftResult;
use crate::layer::model::{Layer, VectorLayer};
use crate::path::project::Projection;

/// Closest projection onto one path layer, expressed both locally and on the canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerProjection {
    pub layer_id: String,
    /// Projection in the layer's local coordinates.
    pub projection: Projection,
    pub canvas_point: Point,
    /// Squared canvas-space distance from the query point.
    pub canvas_distance_sq: f64,
}

/// Projects a canvas-space point onto every path layer and keeps the closest.
///
/// The query point is mapped into each layer's local space through the inverse of its
/// accumulated group transform. Layers whose transform is singular are skipped. On equal
/// distances the layer visited first wins.
#[tracing::instrument(skip(vector), fields(vector = %vector.id))]
pub fn closest_projection(vector: &VectorLayer, point: Point) -> Option<LayerProjection> {
    let mut best: Option<LayerProjection> = None;
    vector.walk(&mut |layer: &Layer, transform: Affine| {
        let Layer::Path(path_layer) = layer else {
            return;
        };
        if transform.determinant().abs() < f64::EPSILON {
            tracing::trace!(layer = %path_layer.id, "skipping singular transform");
            return;
        }
        let local = transform.inverse() * point;
        let Some(projection) = path_layer.path_data.project(local) else {
            return;
        };
        let canvas_point = transform * projection.point;
        let canvas_distance_sq = canvas_point.distance_squared(point);
        if best
            .as_ref()
            .is_none_or(|b| canvas_distance_sq < b.canvas_distance_sq)
        {
            best = Some(LayerProjection {
                layer_id: path_layer.id.clone(),
                projection,
                canvas_point,
                canvas_distance_sq,
            });
        }
    });
    if let Some(hit) = &best {
        tracing::debug!(
            layer = %hit.layer_id,
            distance_sq = hit.canvas_distance_sq,
            "closest projection"
        );
    }
    best
}

/// Splits the closest path layer at the projected point and returns the updated tree.
///
/// Returns `Ok(None)` when the tree has no drawable path layer.
pub fn split_closest(vector: &VectorLayer, point: Point) -> ShapeshiftResult<Option<VectorLayer>> {
    let Some(hit) = closest_projection(vector, point) else {
        return Ok(None);
    };
    let Some(path_layer) = vector.find_path_layer(&hit.layer_id) else {
        return Ok(None);
    };
    let split = path_layer.path_data.split_at(&hit.projection)?;
    vector.with_path_data(&hit.layer_id, split).map(Some)
}

#[cfg(test)]
#[path = "../../tests/unit/layer/pick.rs"]
mod tests;
