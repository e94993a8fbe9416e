pub mod avd;
pub mod bundle;
pub mod color;
pub mod diff;
pub mod plan;
pub mod svg;
