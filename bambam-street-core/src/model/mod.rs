pub mod accessibility;
pub mod cost;
pub mod mode;
pub mod parking;
pub mod preferences;
pub mod rental;
