pub use kurbo::{Affine, CubicBez, ParamCurve, Point, QuadBez, Vec2};

/// Group-level 2D transform: translation, rotation in degrees, non-uniform scale and a pivot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_deg: f64,
    pub scale: Vec2,  // default (1,1)
    pub pivot: Vec2, // in local space
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            pivot: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_pivot = Affine::translate(self.pivot);
        let t_unpivot = Affine::translate(-self.pivot);
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // Canonical order:
        // T(pivot) * T(translate) * R(rot) * S(scale) * T(-pivot)
        t_pivot * t_translate * t_rotate * t_scale * t_unpivot
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
