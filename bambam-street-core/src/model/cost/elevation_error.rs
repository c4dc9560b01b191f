#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ElevationError {
    #[error("invalid elevation profile: {0}")]
    InvalidProfile(String),
    #[error("elevation profile has no horizontal extent: {0}")]
    DegenerateProfile(String),
}
