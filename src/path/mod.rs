pub mod arc;
pub mod builder;
pub mod command;
pub mod model;
pub(crate) mod parse;
pub mod project;
