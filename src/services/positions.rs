use std::sync::Arc;

use sea_orm::{EntityTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{db::DbPool, entities::position, errors::ServiceError, form};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionInput {
    #[serde(default, deserialize_with = "form::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub duty: Option<String>,
}

impl From<PositionInput> for position::ActiveModel {
    fn from(input: PositionInput) -> Self {
        position::ActiveModel {
            position_id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            duty: Set(input.duty),
        }
    }
}

/// Job roles; list and create only
#[derive(Clone)]
pub struct PositionService {
    db_pool: Arc<DbPool>,
}

impl PositionService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_positions(&self) -> Result<Vec<position::Model>, ServiceError> {
        let positions = position::Entity::find()
            .order_by_asc(position::Column::Name)
            .all(&*self.db_pool)
            .await?;
        Ok(positions)
    }

    #[instrument(skip(self, input))]
    pub async fn create_position(&self, input: PositionInput) -> Result<i32, ServiceError> {
        let model: position::ActiveModel = input.into();
        let result = position::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(position_id = result.last_insert_id, "Position created");
        Ok(result.last_insert_id)
    }
}
