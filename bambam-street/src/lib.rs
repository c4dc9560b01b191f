pub mod model;
pub mod split;
