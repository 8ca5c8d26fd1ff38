use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, NotSet, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{product, store, supplier},
    errors::ServiceError,
    form,
    views::ProductView,
};

/// Body of product create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default, deserialize_with = "form::opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_decimal")]
    pub cost: Option<Decimal>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub quality: Option<String>,
    #[serde(default, rename = "storeID", deserialize_with = "form::opt_i32")]
    pub store_id: Option<i32>,
    #[serde(default, rename = "supplierID", deserialize_with = "form::opt_i32")]
    pub supplier_id: Option<i32>,
}

impl From<ProductInput> for product::ActiveModel {
    fn from(input: ProductInput) -> Self {
        product::ActiveModel {
            product_id: NotSet,
            product_name: Set(input.product_name),
            cost: Set(input.cost),
            description: Set(input.description),
            quality: Set(input.quality),
            store_id: Set(input.store_id),
            supplier_id: Set(input.supplier_id),
        }
    }
}

/// Service for managing the product catalog
#[derive(Clone)]
pub struct ProductService {
    db_pool: Arc<DbPool>,
}

impl ProductService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Products with their store name and supplier names, by product name
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<ProductView>, ServiceError> {
        let products = product::Entity::find()
            .select_only()
            .column_as(product::Column::ProductId, "product_id")
            .column_as(product::Column::ProductName, "product_name")
            .column_as(product::Column::Cost, "cost")
            .column_as(product::Column::Description, "description")
            .column_as(product::Column::Quality, "quality")
            .column_as(product::Column::StoreId, "store_id")
            .column_as(product::Column::SupplierId, "supplier_id")
            .column_as(store::Column::StoreName, "store_name")
            .column_as(supplier::Column::FirstName, "supplier_first_name")
            .column_as(supplier::Column::LastName, "supplier_last_name")
            .join(JoinType::LeftJoin, product::Relation::Store.def())
            .join(JoinType::LeftJoin, product::Relation::Supplier.def())
            .order_by_asc(product::Column::ProductName)
            .into_model::<ProductView>()
            .all(&*self.db_pool)
            .await?;
        Ok(products)
    }

    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> Result<i32, ServiceError> {
        let model: product::ActiveModel = input.into();
        let result = product::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(product_id = result.last_insert_id, "Product created");
        Ok(result.last_insert_id)
    }

    /// Replaces every mutable field; a missing id touches nothing
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> Result<u64, ServiceError> {
        let model: product::ActiveModel = input.into();
        let result = product::Entity::update_many()
            .set(model)
            .filter(product::Column::ProductId.eq(id))
            .exec(&*self.db_pool)
            .await?;
        info!(product_id = id, rows = result.rows_affected, "Product updated");
        Ok(result.rows_affected)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<u64, ServiceError> {
        let result = product::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        info!(product_id = id, rows = result.rows_affected, "Product deleted");
        Ok(result.rows_affected)
    }
}
