use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};

use crate::{EngineError, ResultEngine};

mod campaigns;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Fetch a campaign row or fail with [`EngineError::CampaignNotFound`].
async fn require_campaign<C: ConnectionTrait>(
    db: &C,
    campaign_id: &str,
) -> ResultEngine<crate::campaigns::Model> {
    crate::campaigns::Entity::find_by_id(campaign_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| EngineError::CampaignNotFound(campaign_id.to_string()))
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
