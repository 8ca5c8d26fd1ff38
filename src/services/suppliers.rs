use std::sync::Arc;

use sea_orm::{ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{db::DbPool, entities::supplier, errors::ServiceError, form};

/// Body of supplier create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierInput {
    #[serde(default, deserialize_with = "form::opt_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub email: Option<String>,
}

impl From<SupplierInput> for supplier::ActiveModel {
    fn from(input: SupplierInput) -> Self {
        supplier::ActiveModel {
            supplier_id: NotSet,
            first_name: Set(input.first_name),
            middle_name: Set(input.middle_name),
            last_name: Set(input.last_name),
            phone_number: Set(input.phone_number),
            address: Set(input.address),
            email: Set(input.email),
        }
    }
}

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
}

impl SupplierService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// All suppliers ordered by last then first name
    #[instrument(skip(self))]
    pub async fn list_suppliers(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        let suppliers = supplier::Entity::find()
            .order_by_asc(supplier::Column::LastName)
            .order_by_asc(supplier::Column::FirstName)
            .all(&*self.db_pool)
            .await?;
        Ok(suppliers)
    }

    /// Inserts a supplier and returns its new id
    #[instrument(skip(self, input))]
    pub async fn create_supplier(&self, input: SupplierInput) -> Result<i32, ServiceError> {
        let model: supplier::ActiveModel = input.into();
        let result = supplier::Entity::insert(model)
            .exec(&*self.db_pool)
            .await?;
        info!(supplier_id = result.last_insert_id, "Supplier created");
        Ok(result.last_insert_id)
    }

    /// Replaces every mutable field; returns the number of rows touched
    #[instrument(skip(self, input))]
    pub async fn update_supplier(&self, id: i32, input: SupplierInput) -> Result<u64, ServiceError> {
        let model: supplier::ActiveModel = input.into();
        let result = supplier::Entity::update_many()
            .set(model)
            .filter(supplier::Column::SupplierId.eq(id))
            .exec(&*self.db_pool)
            .await?;
        info!(supplier_id = id, rows = result.rows_affected, "Supplier updated");
        Ok(result.rows_affected)
    }

    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: i32) -> Result<u64, ServiceError> {
        let result = supplier::Entity::delete_by_id(id)
            .exec(&*self.db_pool)
            .await?;
        info!(supplier_id = id, rows = result.rows_affected, "Supplier deleted");
        Ok(result.rows_affected)
    }
}
