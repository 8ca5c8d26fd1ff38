use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Billing document; `totalAmount` feeds the revenue figure on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "INVOICE")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "invoiceID")]
    #[serde(rename = "invoiceID")]
    pub invoice_id: i32,
    #[sea_orm(column_name = "customerID")]
    #[serde(rename = "customerID")]
    pub customer_id: Option<i32>,
    #[sea_orm(column_name = "customerName")]
    pub customer_name: Option<String>,
    #[sea_orm(column_name = "totalAmount", column_type = "Decimal(Some((12, 2)))", nullable)]
    pub total_amount: Option<Decimal>,
    #[sea_orm(column_name = "invoiceDate")]
    pub invoice_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
