//! shapeshift is a vector-path morphing engine.
//!
//! Given a start and an end path it can:
//!
//! - Check whether the pair is morphable and explain why not
//! - Interpolate intermediate frames, optionally through a timing curve
//! - Project a point onto a path and split it there to add points
//! - Convert elliptical arcs to cubic Beziers
//! - Diff start/end layer trees into animation descriptors for AVD and SVG/CSS
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod export;
pub mod layer;
pub mod morph;
pub mod path;

pub use crate::foundation::core::{Affine, Point, Transform2D, Vec2};
pub use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};

pub use crate::animation::interpolator::Interpolator;
pub use crate::export::diff::{LayerDiff, LayerSnapshot, PropertyChange, diff_snapshots};
pub use crate::export::plan::{ExportPlan, ExportScene, ExportSettings, generate_export};
pub use crate::layer::model::{ClipPathLayer, GroupLayer, Layer, PathLayer, VectorLayer};
pub use crate::layer::pick::{LayerProjection, closest_projection, split_closest};
pub use crate::morph::check::{Morphability, classify, diagnose, is_morphable, status_message};
pub use crate::morph::interpolate::{Morph, interpolate};
pub use crate::path::arc::{ArcConversion, ArcDescriptor, arc_to_beziers};
pub use crate::path::builder::PathBuilder;
pub use crate::path::command::{Command, CommandKind};
pub use crate::path::model::Path;
pub use crate::path::project::{Projection, project, split, split_all};
