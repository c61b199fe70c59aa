//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`CampaignNotFound`] thrown when no row matches the requested id.
//! - [`InvalidStatus`] thrown by `CampaignStatus::from_str` for an unknown
//!   status string. Stored rows report a bad status as [`InvalidRecord`].
//! - [`InvalidRecord`] thrown when a stored row cannot be decoded.
//!
//!  [`CampaignNotFound`]: EngineError::CampaignNotFound
//!  [`InvalidStatus`]: EngineError::InvalidStatus
//!  [`InvalidRecord`]: EngineError::InvalidRecord
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Holds the id that was looked up.
    #[error("Campaign not found")]
    CampaignNotFound(String),
    /// Only produced by `CampaignStatus::from_str`.
    #[error("Invalid status: \"{0}\"")]
    InvalidStatus(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CampaignNotFound(a), Self::CampaignNotFound(b)) => a == b,
            (Self::InvalidStatus(a), Self::InvalidStatus(b)) => a == b,
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
