use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{Campaign, CampaignCmd, ResultEngine, campaigns};

use super::{Engine, require_campaign, with_tx};

impl Engine {
    /// Return every stored campaign, in storage order.
    pub async fn campaigns(&self) -> ResultEngine<Vec<Campaign>> {
        campaigns::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(Campaign::try_from)
            .collect()
    }

    /// Return a single campaign by id.
    pub async fn campaign(&self, campaign_id: &str) -> ResultEngine<Campaign> {
        let model = require_campaign(&self.database, campaign_id).await?;
        Campaign::try_from(model)
    }

    /// Store a new campaign.
    ///
    /// The id and the creation timestamp are assigned here; the returned value
    /// is exactly what was written.
    pub async fn new_campaign(&self, cmd: CampaignCmd) -> ResultEngine<Campaign> {
        let campaign = Campaign::new(cmd);
        campaigns::ActiveModel::from(&campaign)
            .insert(&self.database)
            .await?;

        tracing::info!(id = %campaign.id, status = %campaign.status, "campaign created");
        Ok(campaign)
    }

    /// Replace `name`, `budget` and `status` of an existing campaign.
    ///
    /// `id` and `created_at` are left as stored. The returned campaign is read
    /// back from the database after the write.
    pub async fn update_campaign(
        &self,
        campaign_id: &str,
        cmd: CampaignCmd,
    ) -> ResultEngine<Campaign> {
        with_tx!(self, |db_tx| {
            require_campaign(&db_tx, campaign_id).await?;

            let active = campaigns::ActiveModel {
                id: ActiveValue::Unchanged(campaign_id.to_string()),
                name: ActiveValue::Set(cmd.name),
                budget: ActiveValue::Set(cmd.budget),
                status: ActiveValue::Set(cmd.status.as_str().to_string()),
                ..Default::default()
            };
            active.update(&db_tx).await?;

            let model = require_campaign(&db_tx, campaign_id).await?;
            tracing::debug!(id = campaign_id, "campaign updated");
            Campaign::try_from(model)
        })
    }

    /// Permanently remove a campaign.
    pub async fn delete_campaign(&self, campaign_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_campaign(&db_tx, campaign_id).await?;

            campaigns::Entity::delete_by_id(campaign_id.to_string())
                .exec(&db_tx)
                .await?;

            tracing::info!(id = campaign_id, "campaign deleted");
            Ok(())
        })
    }
}
