//! Error types shared by the models, rate and valuation modules

use crate::models::DepreciationMethod;

/// Errors raised while validating inputs or running a computation
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    /// Malformed or out-of-range input (non-positive length, bad literal, ...)
    #[error("validation error: {0}")]
    Validation(String),

    /// The depreciation method is accepted by the model but has no formula
    #[error("unsupported depreciation method: {0}")]
    UnsupportedMethod(DepreciationMethod),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValuationError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ValuationError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ValuationError>;
