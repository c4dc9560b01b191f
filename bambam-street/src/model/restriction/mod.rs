mod time_window;
mod turn_restriction;

pub use time_window::TimeWindow;
pub use turn_restriction::{TurnRestriction, TurnRestrictionType};
