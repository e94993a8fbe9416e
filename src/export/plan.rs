use crate::animation::interpolator::Interpolator;
use crate::export::avd::{AvdTarget, avd_targets};
use crate::export::diff::{DiffLayer, LayerSnapshot, diff_snapshots};
use crate::export::svg::{SvgTarget, svg_targets};
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::layer::model::{Layer, VectorLayer};

/// Timing parameters shared by both export schemas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub duration_ms: u64,
    pub android_interpolator: Interpolator,
    /// Curve for the web schema, emitted as its CSS timing function.
    pub web_interpolator: Interpolator,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            android_interpolator: Interpolator::FastOutSlowIn,
            web_interpolator: Interpolator::AccelerateDecelerate,
        }
    }
}

/// Everything a packager needs: both descriptor sets and both static documents.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExportPlan {
    pub avd_targets: Vec<AvdTarget>,
    pub svg_targets: Vec<SvgTarget>,
    pub start_document: VectorLayer,
    pub end_document: VectorLayer,
}

/// Diffs two snapshots and encodes the result for both schemas.
#[tracing::instrument(skip_all, fields(start = %start.vector.id, end = %end.vector.id))]
pub fn generate_export(
    start: &LayerSnapshot<'_>,
    end: &LayerSnapshot<'_>,
    settings: &ExportSettings,
) -> ShapeshiftResult<ExportPlan> {
    let diffs = diff_snapshots(start, end)?;
    let rotation_animated = diffs.iter().any(|d| d.layer == DiffLayer::Rotation);

    let avd_targets = avd_targets(
        &diffs,
        settings.duration_ms,
        settings.android_interpolator.android_ref(),
    );
    let svg_targets = svg_targets(
        &diffs,
        settings.duration_ms,
        settings.web_interpolator.css_timing(),
    );

    let plan = ExportPlan {
        avd_targets,
        svg_targets,
        start_document: output_document(start, rotation_animated)?,
        end_document: output_document(end, rotation_animated)?,
    };
    tracing::debug!(
        targets = plan.avd_targets.len(),
        rotation_animated,
        "export plan generated"
    );
    Ok(plan)
}

/// Root copy holding the rotation group when rotation is animated, else the bare path layer.
fn output_document(
    snapshot: &LayerSnapshot<'_>,
    rotation_animated: bool,
) -> ShapeshiftResult<VectorLayer> {
    let child = match (rotation_animated, snapshot.rotation, snapshot.path) {
        (true, Some(group), _) => Layer::Group(group.clone()),
        (_, _, Some(path)) => Layer::Path(path.clone()),
        _ => {
            return Err(ShapeshiftError::incompatible_layers(format!(
                "vector layer '{}' has no path layer to export",
                snapshot.vector.id
            )));
        }
    };
    Ok(snapshot.vector.with_single_child(child))
}

/// Serialized export request: both layer trees plus the ids of the layers to animate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportScene {
    pub start: VectorLayer,
    pub end: VectorLayer,
    pub path_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_id: Option<String>,
    #[serde(default)]
    pub settings: ExportSettings,
}

impl ExportScene {
    pub fn from_json(json: &str) -> ShapeshiftResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn start_snapshot(&self) -> LayerSnapshot<'_> {
        LayerSnapshot::resolve(&self.start, &self.path_id, self.rotation_id.as_deref())
    }

    pub fn end_snapshot(&self) -> LayerSnapshot<'_> {
        LayerSnapshot::resolve(&self.end, &self.path_id, self.rotation_id.as_deref())
    }

    pub fn generate(&self) -> ShapeshiftResult<ExportPlan> {
        generate_export(&self.start_snapshot(), &self.end_snapshot(), &self.settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/plan.rs"]
mod tests;
