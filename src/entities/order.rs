use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A stock order placed for a product.
///
/// `productName` is captured at order time so the row stays readable after
/// the referenced product is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ORDER")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "orderID")]
    #[serde(rename = "orderID")]
    pub order_id: i32,
    #[sea_orm(column_name = "orderDate")]
    pub order_date: Option<NaiveDate>,
    #[sea_orm(column_name = "productName")]
    pub product_name: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub amount: Option<Decimal>,
    #[sea_orm(column_name = "productID")]
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId",
        on_delete = "SetNull"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
