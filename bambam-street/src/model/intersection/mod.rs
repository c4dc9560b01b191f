mod constant_calculator;
mod intersection_traversal_calculator;
mod simple_calculator;

pub use constant_calculator::ConstantIntersectionTraversalCalculator;
pub use intersection_traversal_calculator::{from_preferences, IntersectionTraversalCalculator};
pub use simple_calculator::SimpleIntersectionTraversalCalculator;
