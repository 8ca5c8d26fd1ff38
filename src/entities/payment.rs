use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PAYMENT")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "paymentID")]
    #[serde(rename = "paymentID")]
    pub payment_id: i32,
    #[sea_orm(column_name = "paymentDate")]
    pub payment_date: Option<NaiveDate>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub amount: Option<Decimal>,
    pub time: Option<NaiveTime>,
    pub method: Option<String>,
    #[sea_orm(column_name = "paymentMethodID")]
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::PaymentMethodId",
        to = "super::payment_method::Column::PaymentMethodId",
        on_delete = "SetNull"
    )]
    PaymentMethod,
}

impl Related<super::payment_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
