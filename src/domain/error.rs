use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown intent `{value}`")]
    UnknownIntent { value: String },
}
