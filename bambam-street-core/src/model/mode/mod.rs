mod street_mode;
mod street_traversal_permission;
mod traverse_mode;
mod traverse_mode_set;

pub use street_mode::StreetMode;
pub use street_traversal_permission::StreetTraversalPermission;
pub use traverse_mode::TraverseMode;
pub use traverse_mode_set::TraverseModeSet;
