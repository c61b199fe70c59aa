//! Campaigns API endpoints.

use api_types::campaign::{Campaign, CampaignNew, CampaignStatus, Detail};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn status_to_engine(status: CampaignStatus) -> engine::CampaignStatus {
    match status {
        CampaignStatus::Active => engine::CampaignStatus::Active,
        CampaignStatus::Paused => engine::CampaignStatus::Paused,
    }
}

fn status_from_engine(status: engine::CampaignStatus) -> CampaignStatus {
    match status {
        engine::CampaignStatus::Active => CampaignStatus::Active,
        engine::CampaignStatus::Paused => CampaignStatus::Paused,
    }
}

fn command(payload: CampaignNew) -> engine::CampaignCmd {
    engine::CampaignCmd::new(payload.name, payload.budget, status_to_engine(payload.status))
}

fn view(campaign: engine::Campaign) -> Campaign {
    Campaign {
        id: campaign.id.to_string(),
        created_at: campaign.created_at_rfc3339(),
        name: campaign.name,
        budget: campaign.budget,
        status: status_from_engine(campaign.status),
    }
}

/// Handle requests for listing every `Campaign`
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Campaign>>, ServerError> {
    let campaigns = state.engine.campaigns().await?;

    Ok(Json(campaigns.into_iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Campaign>, ServerError> {
    let campaign = state.engine.campaign(&campaign_id).await?;

    Ok(Json(view(campaign)))
}

/// Handle requests for creating a new `Campaign`
///
/// A body that does not parse, including an unknown `status`, is rejected
/// before the engine is called.
pub async fn campaign_new(
    State(state): State<ServerState>,
    payload: Result<Json<CampaignNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Campaign>), ServerError> {
    let Json(payload) = payload?;
    let campaign = state.engine.new_campaign(command(payload)).await?;

    Ok((StatusCode::CREATED, Json(view(campaign))))
}

pub async fn campaign_update(
    State(state): State<ServerState>,
    Path(campaign_id): Path<String>,
    payload: Result<Json<CampaignNew>, JsonRejection>,
) -> Result<Json<Campaign>, ServerError> {
    let Json(payload) = payload?;
    let campaign = state
        .engine
        .update_campaign(&campaign_id, command(payload))
        .await?;

    Ok(Json(view(campaign)))
}

pub async fn campaign_delete(
    State(state): State<ServerState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Detail>, ServerError> {
    state.engine.delete_campaign(&campaign_id).await?;

    Ok(Json(Detail {
        detail: "Campaign deleted".to_string(),
    }))
}
