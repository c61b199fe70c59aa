//! Command structs for engine operations.

use crate::CampaignStatus;

/// The mutable fields of a campaign.
///
/// Used both to create a campaign and to replace the fields of an existing
/// one. `id` and `created_at` are never part of a command.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCmd {
    pub name: String,
    pub budget: f64,
    pub status: CampaignStatus,
}

impl CampaignCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, budget: f64, status: CampaignStatus) -> Self {
        Self {
            name: name.into(),
            budget,
            status,
        }
    }
}
