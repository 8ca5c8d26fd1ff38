use std::sync::Arc;

use sea_orm::{EntityTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{db::DbPool, entities::store, errors::ServiceError, form};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInput {
    #[serde(default, deserialize_with = "form::opt_string")]
    pub store_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub store_number: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub location: Option<String>,
}

impl From<StoreInput> for store::ActiveModel {
    fn from(input: StoreInput) -> Self {
        store::ActiveModel {
            store_id: NotSet,
            store_name: Set(input.store_name),
            store_number: Set(input.store_number),
            location: Set(input.location),
        }
    }
}

/// Service for managing store branches
#[derive(Clone)]
pub struct StoreService {
    db_pool: Arc<DbPool>,
}

impl StoreService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<store::Model>, ServiceError> {
        let stores = store::Entity::find()
            .order_by_asc(store::Column::StoreName)
            .all(&*self.db_pool)
            .await?;
        Ok(stores)
    }

    #[instrument(skip(self, input))]
    pub async fn create_store(&self, input: StoreInput) -> Result<i32, ServiceError> {
        let model: store::ActiveModel = input.into();
        let result = store::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(store_id = result.last_insert_id, "Store created");
        Ok(result.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn delete_store(&self, id: i32) -> Result<u64, ServiceError> {
        let result = store::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        info!(store_id = id, rows = result.rows_affected, "Store deleted");
        Ok(result.rows_affected)
    }
}
