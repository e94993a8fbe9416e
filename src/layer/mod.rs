pub mod model;
pub mod pick;
