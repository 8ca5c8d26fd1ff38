use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    EntityTrait, JoinType, NotSet, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{order, product},
    errors::ServiceError,
    form,
    views::OrderView,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(default, deserialize_with = "form::opt_date")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default, rename = "productID", deserialize_with = "form::opt_i32")]
    pub product_id: Option<i32>,
}

impl From<OrderInput> for order::ActiveModel {
    fn from(input: OrderInput) -> Self {
        order::ActiveModel {
            order_id: NotSet,
            order_date: Set(input.order_date),
            product_name: Set(input.product_name),
            amount: Set(input.amount),
            product_id: Set(input.product_id),
        }
    }
}

/// Service for stock orders
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
}

impl OrderService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Orders newest first, naming the product from the catalog when it still exists
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderView>, ServiceError> {
        let product_name = SimpleExpr::from(Func::coalesce([
            SimpleExpr::from(Expr::col((product::Entity, product::Column::ProductName))),
            SimpleExpr::from(Expr::col((order::Entity, order::Column::ProductName))),
        ]));

        let orders = order::Entity::find()
            .select_only()
            .column_as(order::Column::OrderId, "order_id")
            .column_as(order::Column::OrderDate, "order_date")
            .column_as(product_name, "product_name")
            .column_as(order::Column::Amount, "amount")
            .column_as(order::Column::ProductId, "product_id")
            .join(JoinType::LeftJoin, order::Relation::Product.def())
            .order_by_desc(order::Column::OrderDate)
            .order_by_desc(order::Column::OrderId)
            .into_model::<OrderView>()
            .all(&*self.db_pool)
            .await?;
        Ok(orders)
    }

    #[instrument(skip(self, input))]
    pub async fn create_order(&self, input: OrderInput) -> Result<i32, ServiceError> {
        let model: order::ActiveModel = input.into();
        let result = order::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(order_id = result.last_insert_id, "Order created");
        Ok(result.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: i32) -> Result<u64, ServiceError> {
        let result = order::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        info!(order_id = id, rows = result.rows_affected, "Order deleted");
        Ok(result.rows_affected)
    }
}
