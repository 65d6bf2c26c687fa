use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown form field: {0:?} (expected \"name\" or \"email\")")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
