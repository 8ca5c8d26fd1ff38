use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A catalog item stocked by a store and sourced from a supplier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PRODUCT")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "productID")]
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[sea_orm(column_name = "productName")]
    pub product_name: Option<String>,
    /// Unit cost in GHS.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub cost: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub quality: Option<String>,
    #[sea_orm(column_name = "storeID")]
    #[serde(rename = "storeID")]
    pub store_id: Option<i32>,
    #[sea_orm(column_name = "supplierID")]
    #[serde(rename = "supplierID")]
    pub supplier_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::StoreId",
        on_delete = "SetNull"
    )]
    Store,
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::SupplierId",
        on_delete = "SetNull"
    )]
    Supplier,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
