use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which tender types a payment used.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PAYMENTMETHOD")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "paymentMethodID")]
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: i32,
    pub cash: bool,
    pub momo: bool,
    pub bank: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
