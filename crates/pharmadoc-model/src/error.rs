use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown system category: {0}")]
    UnknownCategory(String),
    #[error("unknown document class: {0}")]
    UnknownClass(String),
    #[error("unknown document type: {0}")]
    UnknownDocument(String),
}
