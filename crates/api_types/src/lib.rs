//! JSON types shared by the HTTP server and its clients.

use serde::{Deserialize, Serialize};

pub mod campaign {
    use super::*;

    /// Status of a campaign.
    ///
    /// Only the two lowercase spellings are accepted on the wire; anything else
    /// fails deserialization, so a request carrying it never reaches the store.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum CampaignStatus {
        Active,
        Paused,
    }

    /// Body of `POST /campaign` and `PUT /campaign/{id}`.
    ///
    /// Update replaces all three fields, there is no partial update.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CampaignNew {
        pub name: String,
        pub budget: f64,
        pub status: CampaignStatus,
    }

    /// A stored campaign as returned by every read and write route.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Campaign {
        pub id: String,
        pub name: String,
        pub budget: f64,
        pub status: CampaignStatus,
        /// ISO-8601 with explicit UTC offset, e.g. `2026-10-16T09:30:00.123456+00:00`.
        #[serde(rename = "createdAt")]
        pub created_at: String,
    }

    /// Body of a successful `DELETE /campaign/{id}`, and of every error response.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Detail {
        pub detail: String,
    }
}
