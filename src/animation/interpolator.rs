use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ShapeshiftError;

/// Named timing curve applied to a `[0, 1]` animation fraction.
///
/// Each curve has an Android resource reference (used by vector-drawable export) and a CSS
/// timing-function equivalent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Interpolator {
    Linear,
    #[default]
    FastOutSlowIn,
    FastOutLinearIn,
    LinearOutSlowIn,
    AccelerateDecelerate,
    Accelerate,
    Decelerate,
    Anticipate,
    Overshoot,
}

const TENSION: f64 = 2.0;
const BEZIER_SOLVE_STEPS: usize = 32;

impl Interpolator {
    pub const ALL: [Self; 9] = [
        Self::Linear,
        Self::FastOutSlowIn,
        Self::FastOutLinearIn,
        Self::LinearOutSlowIn,
        Self::AccelerateDecelerate,
        Self::Accelerate,
        Self::Decelerate,
        Self::Anticipate,
        Self::Overshoot,
    ];

    /// Eased fraction. Input is clamped to `[0, 1]`; `Anticipate` and `Overshoot` leave that
    /// range in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Self::AccelerateDecelerate => {
                ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
            }
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Anticipate => t * t * ((TENSION + 1.0) * t - TENSION),
            Self::Overshoot => {
                let u = t - 1.0;
                u * u * ((TENSION + 1.0) * u + TENSION) + 1.0
            }
        }
    }

    pub fn android_ref(self) -> &'static str {
        match self {
            Self::Linear => "@android:anim/linear_interpolator",
            Self::FastOutSlowIn => "@android:interpolator/fast_out_slow_in",
            Self::FastOutLinearIn => "@android:interpolator/fast_out_linear_in",
            Self::LinearOutSlowIn => "@android:interpolator/linear_out_slow_in",
            Self::AccelerateDecelerate => "@android:anim/accelerate_decelerate_interpolator",
            Self::Accelerate => "@android:anim/accelerate_interpolator",
            Self::Decelerate => "@android:anim/decelerate_interpolator",
            Self::Anticipate => "@android:anim/anticipate_interpolator",
            Self::Overshoot => "@android:anim/overshoot_interpolator",
        }
    }

    /// Closest CSS `animation-timing-function` value.
    pub fn css_timing(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::FastOutSlowIn => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::FastOutLinearIn => "cubic-bezier(0.4, 0, 1, 1)",
            Self::LinearOutSlowIn => "cubic-bezier(0, 0, 0.2, 1)",
            Self::AccelerateDecelerate => "ease-in-out",
            Self::Accelerate => "ease-in",
            Self::Decelerate => "ease-out",
            Self::Anticipate => "cubic-bezier(0.6, -0.28, 0.735, 0.045)",
            Self::Overshoot => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        }
    }

    /// Short kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::FastOutSlowIn => "fast-out-slow-in",
            Self::FastOutLinearIn => "fast-out-linear-in",
            Self::LinearOutSlowIn => "linear-out-slow-in",
            Self::AccelerateDecelerate => "accelerate-decelerate",
            Self::Accelerate => "accelerate",
            Self::Decelerate => "decelerate",
            Self::Anticipate => "anticipate",
            Self::Overshoot => "overshoot",
        }
    }
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` evaluated at progress `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let coord = |p1: f64, p2: f64, s: f64| {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    };
    // x(s) is monotonic for control x values in [0, 1].
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..BEZIER_SOLVE_STEPS {
        let mid = (lo + hi) / 2.0;
        if coord(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    coord(y1, y2, (lo + hi) / 2.0)
}

impl fmt::Display for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolator {
    type Err = ShapeshiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|i| i.name() == wanted)
            .ok_or_else(|| ShapeshiftError::Other(anyhow::anyhow!("unknown interpolator '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolator.rs"]
mod tests;
