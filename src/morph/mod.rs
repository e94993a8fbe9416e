pub mod check;
pub mod interpolate;
