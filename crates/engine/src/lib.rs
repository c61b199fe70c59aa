//! Storage engine for campaigns.
//!
//! [`Engine`] owns the database handle and exposes the store operations:
//! list, get, create, update and delete. Every operation is a short sequence
//! of statements against the single `campaigns` table.

pub use campaigns::{Campaign, CampaignStatus};
pub use commands::CampaignCmd;
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};

mod campaigns;
mod commands;
mod error;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;
