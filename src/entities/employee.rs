use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff member assigned to a store and a position.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "EMPLOYEE")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "employeeID")]
    #[serde(rename = "employeeID")]
    pub employee_id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: Option<String>,
    #[sea_orm(column_name = "middleName")]
    pub middle_name: Option<String>,
    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,
    pub phonenumber: Option<String>,
    pub email: Option<String>,
    #[sea_orm(column_name = "storeID")]
    #[serde(rename = "storeID")]
    pub store_id: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_name = "positionID")]
    #[serde(rename = "positionID")]
    pub position_id: Option<i32>,
    pub dob: Option<NaiveDate>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub salary: Option<Decimal>,
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
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::PositionId",
        on_delete = "SetNull"
    )]
    Position,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
