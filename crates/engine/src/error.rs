//! The module contains the errors the engine can throw.
//!
//! Most board operations cannot fail: an invalid account save is reported as
//! [`SaveOutcome::Rejected`] rather than an error. The errors are:
//!
//! - [`KeyNotFound`] thrown when a record id is not in the collection.
//! - [`UnknownRole`], [`UnknownCategory`] and [`UnknownSelector`] thrown when
//!   parsing a label that is not part of the closed enumerations.
//! - [`DuplicateId`] thrown when a loaded dataset repeats a record id.
//! - [`Csv`], [`Io`] and [`Json`] thrown by the outer surfaces (export, seed
//!   files).
//!
//!  [`SaveOutcome::Rejected`]: crate::SaveOutcome::Rejected
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`UnknownRole`]: EngineError::UnknownRole
//!  [`UnknownCategory`]: EngineError::UnknownCategory
//!  [`UnknownSelector`]: EngineError::UnknownSelector
//!  [`DuplicateId`]: EngineError::DuplicateId
//!  [`Csv`]: EngineError::Csv
//!  [`Io`]: EngineError::Io
//!  [`Json`]: EngineError::Json
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown selector: {0}")]
    UnknownSelector(String),
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: u64 },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::UnknownRole(a), Self::UnknownRole(b)) => a == b,
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            (Self::UnknownSelector(a), Self::UnknownSelector(b)) => a == b,
            (
                Self::DuplicateId { collection, id },
                Self::DuplicateId {
                    collection: other_collection,
                    id: other_id,
                },
            ) => collection == other_collection && id == other_id,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
