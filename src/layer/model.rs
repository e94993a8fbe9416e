use crate::foundation::core::{Affine, Transform2D};
use crate::foundation::error::{ShapeshiftError, ShapeshiftResult};
use crate::path::model::Path;

fn one() -> f64 {
    1.0
}

/// A node of the layer tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Layer {
    Vector(VectorLayer),
    Group(GroupLayer),
    Path(PathLayer),
    ClipPath(ClipPathLayer),
}

/// Root of a layer tree: canvas size, global alpha and children.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VectorLayer {
    pub id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default = "one")]
    pub alpha: f64,
    #[serde(default)]
    pub children: Vec<Layer>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupLayer {
    pub id: String,
    #[serde(flatten)]
    pub transform: Transform2D,
    #[serde(default)]
    pub children: Vec<Layer>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathLayer {
    pub id: String,
    pub path_data: Path,
    /// Hex color as authored (`#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// Style attributes left unset stay `None` and are never animated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipPathLayer {
    pub id: String,
    pub path_data: Path,
}

impl GroupLayer {
    /// Rotation in degrees around the group pivot.
    pub fn rotation(&self) -> f64 {
        self.transform.rotation_deg
    }
}

impl Layer {
    pub fn id(&self) -> &str {
        match self {
            Self::Vector(l) => &l.id,
            Self::Group(l) => &l.id,
            Self::Path(l) => &l.id,
            Self::ClipPath(l) => &l.id,
        }
    }

    pub fn children(&self) -> &[Layer] {
        match self {
            Self::Vector(l) => &l.children,
            Self::Group(l) => &l.children,
            Self::Path(_) | Self::ClipPath(_) => &[],
        }
    }

    /// Depth-first, pre-order traversal.
    ///
    /// `visit` receives each layer with the transform mapping that layer's local coordinates to
    /// the root canvas. A group's own transform is included for the group itself.
    pub fn walk<'a>(&'a self, parent: Affine, visit: &mut impl FnMut(&'a Layer, Affine)) {
        let transform = match self {
            Self::Group(g) => parent * g.transform.to_affine(),
            _ => parent,
        };
        visit(self, transform);
        for child in self.children() {
            child.walk(transform, visit);
        }
    }

    pub fn find(&self, id: &str) -> Option<&Layer> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(id))
    }

    fn with_path_data(&self, id: &str, path: &Path, replaced: &mut bool) -> Layer {
        match self {
            Self::Path(l) if l.id == id => {
                *replaced = true;
                Self::Path(PathLayer {
                    path_data: path.clone(),
                    ..l.clone()
                })
            }
            Self::ClipPath(l) if l.id == id => {
                *replaced = true;
                Self::ClipPath(ClipPathLayer {
                    id: l.id.clone(),
                    path_data: path.clone(),
                })
            }
            Self::Vector(l) => Self::Vector(VectorLayer {
                children: l
                    .children
                    .iter()
                    .map(|c| c.with_path_data(id, path, replaced))
                    .collect(),
                ..l.clone()
            }),
            Self::Group(l) => Self::Group(GroupLayer {
                children: l
                    .children
                    .iter()
                    .map(|c| c.with_path_data(id, path, replaced))
                    .collect(),
                ..l.clone()
            }),
            other => other.clone(),
        }
    }
}

impl VectorLayer {
    /// Walks the whole tree starting at the identity transform.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Layer, Affine)) {
        for child in &self.children {
            child.walk(Affine::IDENTITY, visit);
        }
    }

    pub fn find(&self, id: &str) -> Option<&Layer> {
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_path_layer(&self, id: &str) -> Option<&PathLayer> {
        match self.find(id)? {
            Layer::Path(l) => Some(l),
            _ => None,
        }
    }

    pub fn find_group_layer(&self, id: &str) -> Option<&GroupLayer> {
        match self.find(id)? {
            Layer::Group(l) => Some(l),
            _ => None,
        }
    }

    /// Copy of this tree with the path data of layer `id` replaced.
    pub fn with_path_data(&self, id: &str, path: Path) -> ShapeshiftResult<VectorLayer> {
        let mut replaced = false;
        let children = self
            .children
            .iter()
            .map(|c| c.with_path_data(id, &path, &mut replaced))
            .collect();
        if !replaced {
            return Err(ShapeshiftError::incompatible_layers(format!(
                "no path or clip-path layer with id '{id}'"
            )));
        }
        Ok(VectorLayer {
            children,
            ..self.clone()
        })
    }

    /// Copy of this root keeping only `child` as its single child.
    pub fn with_single_child(&self, child: Layer) -> VectorLayer {
        VectorLayer {
            id: self.id.clone(),
            width: self.width,
            height: self.height,
            alpha: self.alpha,
            children: vec![child],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
