use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One clock-in/clock-out record for an employee.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ATTENDANCE")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "attendanceID")]
    #[serde(rename = "attendanceID")]
    pub attendance_id: i32,
    #[sea_orm(column_name = "employeeID")]
    #[serde(rename = "employeeID")]
    pub employee_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[sea_orm(column_name = "timeIn")]
    pub time_in: Option<NaiveTime>,
    #[sea_orm(column_name = "timeOut")]
    pub time_out: Option<NaiveTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::EmployeeId",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
