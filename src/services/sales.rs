use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{EntityTrait, JoinType, NotSet, QueryOrder, QuerySelect, RelationTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{invoice, sale},
    errors::ServiceError,
    form,
    views::SaleView,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    #[serde(default, deserialize_with = "form::opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::opt_time")]
    pub time: Option<NaiveTime>,
    /// Invoice the sale is billed on
    #[serde(default, deserialize_with = "form::opt_i32")]
    pub invoice_number: Option<i32>,
}

impl From<SaleInput> for sale::ActiveModel {
    fn from(input: SaleInput) -> Self {
        sale::ActiveModel {
            sale_id: NotSet,
            date: Set(input.date),
            time: Set(input.time),
            invoice_number: Set(input.invoice_number),
        }
    }
}

/// Point-of-sale transactions; list and create only
#[derive(Clone)]
pub struct SaleService {
    db_pool: Arc<DbPool>,
}

impl SaleService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Sales newest first with the invoice total and customer name
    #[instrument(skip(self))]
    pub async fn list_sales(&self) -> Result<Vec<SaleView>, ServiceError> {
        let sales = sale::Entity::find()
            .select_only()
            .column_as(sale::Column::SaleId, "sale_id")
            .column_as(sale::Column::Date, "date")
            .column_as(sale::Column::Time, "time")
            .column_as(sale::Column::InvoiceNumber, "invoice_number")
            .column_as(invoice::Column::TotalAmount, "total_amount")
            .column_as(invoice::Column::CustomerName, "customer_name")
            .join(JoinType::LeftJoin, sale::Relation::Invoice.def())
            .order_by_desc(sale::Column::Date)
            .order_by_desc(sale::Column::SaleId)
            .into_model::<SaleView>()
            .all(&*self.db_pool)
            .await?;
        Ok(sales)
    }

    #[instrument(skip(self, input))]
    pub async fn create_sale(&self, input: SaleInput) -> Result<i32, ServiceError> {
        let model: sale::ActiveModel = input.into();
        let result = sale::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(sale_id = result.last_insert_id, "Sale recorded");
        Ok(result.last_insert_id)
    }
}
