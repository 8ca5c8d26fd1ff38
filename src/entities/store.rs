use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A physical supermarket branch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "STORE")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "storeID")]
    #[serde(rename = "storeID")]
    pub store_id: i32,
    #[sea_orm(column_name = "storeName")]
    pub store_name: Option<String>,
    #[sea_orm(column_name = "storeNumber")]
    pub store_number: Option<String>,
    pub location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
