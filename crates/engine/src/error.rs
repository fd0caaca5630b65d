//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when a strict amount parse fails.
//! - [`InvalidKind`] thrown when a type/status label is not recognised.
//! - [`Store`] thrown when the row store fails (I/O, CSV, missing table).
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidKind`]: EngineError::InvalidKind
//!  [`Store`]: EngineError::Store
use thiserror::Error;

use crate::store::StoreError;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("Background task failed: {0}")]
    Task(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::Task(a), Self::Task(b)) => a == b,
            (Self::Store(a), Self::Store(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
