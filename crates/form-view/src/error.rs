use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unable to find an element {query}")]
    NotFound { query: String },
    #[error("found {count} elements {query}, expected exactly one")]
    Multiple { query: String, count: usize },
    #[error("element {query} is not a form field")]
    NotAField { query: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
