use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A point-of-sale transaction, linked to the invoice that bills it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "SALE")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "saleID")]
    #[serde(rename = "saleID")]
    pub sale_id: i32,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// References `INVOICE.invoiceID`.
    #[sea_orm(column_name = "invoiceNumber")]
    pub invoice_number: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceNumber",
        to = "super::invoice::Column::InvoiceId",
        on_delete = "SetNull"
    )]
    Invoice,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
