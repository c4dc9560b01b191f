#[derive(thiserror::Error, Debug)]
pub enum PreferencesError {
    #[error("failure reading preferences from {filepath}: {error}")]
    ReadError { filepath: String, error: String },
    #[error("failure deserializing preferences: {0}")]
    DeserializeError(String),
    #[error("invalid preference '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
