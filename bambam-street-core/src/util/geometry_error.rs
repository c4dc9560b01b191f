#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("geometry has too few points: {0}")]
    TooFewPoints(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
