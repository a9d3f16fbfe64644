//! Error type for the fallible edges of the crate
//!
//! The projection engine itself never fails; only parameter validation,
//! persistence and export return `CalcError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParams { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidParams {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
