//! The module contains `Campaign` struct and its persistence model.

use std::{fmt, str::FromStr};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{CampaignCmd, EngineError, ResultEngine};

/// Status of a campaign.
///
/// There are no transition rules: an update may set either value regardless
/// of the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    /// Returns the string stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            other => Err(EngineError::InvalidStatus(other.to_string())),
        }
    }
}

/// A campaign: a named budget allocation with a status.
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    /// Random identifier assigned on creation. Never changes.
    pub id: Uuid,
    pub name: String,
    pub budget: f64,
    pub status: CampaignStatus,
    /// Creation instant, truncated to microseconds so it survives the
    /// round-trip through its stored string form unchanged.
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn new(cmd: CampaignCmd) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: cmd.name,
            budget: cmd.budget,
            status: cmd.status,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// `created_at` as ISO-8601 with an explicit `+00:00` offset.
    pub fn created_at_rfc3339(&self) -> String {
        format_timestamp(self.created_at)
    }
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, false)
}

fn parse_timestamp(value: &str) -> ResultEngine<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| EngineError::InvalidRecord(format!("createdAt \"{value}\": {err}")))
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub budget: f64,
    pub status: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Campaign> for ActiveModel {
    fn from(value: &Campaign) -> Self {
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            name: ActiveValue::Set(value.name.clone()),
            budget: ActiveValue::Set(value.budget),
            status: ActiveValue::Set(value.status.as_str().to_string()),
            created_at: ActiveValue::Set(value.created_at_rfc3339()),
        }
    }
}

impl TryFrom<Model> for Campaign {
    type Error = EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&value.id)
            .map_err(|err| EngineError::InvalidRecord(format!("id \"{}\": {err}", value.id)))?;
        let status = value.status.parse().map_err(|_| {
            EngineError::InvalidRecord(format!("status \"{}\" of campaign {id}", value.status))
        })?;

        Ok(Self {
            id,
            name: value.name,
            budget: value.budget,
            status,
            created_at: parse_timestamp(&value.created_at)?,
        })
    }
}
