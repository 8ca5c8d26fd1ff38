use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, JoinType, NotSet, QueryOrder, QuerySelect, RelationTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{employee, position, store},
    errors::ServiceError,
    form,
    views::EmployeeView,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "form::opt_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub phonenumber: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub email: Option<String>,
    #[serde(default, rename = "storeID", deserialize_with = "form::opt_i32")]
    pub store_id: Option<i32>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub address: Option<String>,
    #[serde(default, rename = "positionID", deserialize_with = "form::opt_i32")]
    pub position_id: Option<i32>,
    #[serde(default, deserialize_with = "form::opt_date")]
    pub dob: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::opt_decimal")]
    pub salary: Option<Decimal>,
}

impl From<EmployeeInput> for employee::ActiveModel {
    fn from(input: EmployeeInput) -> Self {
        employee::ActiveModel {
            employee_id: NotSet,
            first_name: Set(input.first_name),
            middle_name: Set(input.middle_name),
            last_name: Set(input.last_name),
            phonenumber: Set(input.phonenumber),
            email: Set(input.email),
            store_id: Set(input.store_id),
            gender: Set(input.gender),
            address: Set(input.address),
            position_id: Set(input.position_id),
            dob: Set(input.dob),
            salary: Set(input.salary),
        }
    }
}

/// Service for managing staff records
#[derive(Clone)]
pub struct EmployeeService {
    db_pool: Arc<DbPool>,
}

impl EmployeeService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Employees with store and position names, by last then first name
    #[instrument(skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<EmployeeView>, ServiceError> {
        let employees = employee::Entity::find()
            .select_only()
            .column_as(employee::Column::EmployeeId, "employee_id")
            .column_as(employee::Column::FirstName, "first_name")
            .column_as(employee::Column::MiddleName, "middle_name")
            .column_as(employee::Column::LastName, "last_name")
            .column_as(employee::Column::Phonenumber, "phonenumber")
            .column_as(employee::Column::Email, "email")
            .column_as(employee::Column::StoreId, "store_id")
            .column_as(employee::Column::Gender, "gender")
            .column_as(employee::Column::Address, "address")
            .column_as(employee::Column::PositionId, "position_id")
            .column_as(employee::Column::Dob, "dob")
            .column_as(employee::Column::Salary, "salary")
            .column_as(store::Column::StoreName, "store_name")
            .column_as(position::Column::Name, "position_name")
            .join(JoinType::LeftJoin, employee::Relation::Store.def())
            .join(JoinType::LeftJoin, employee::Relation::Position.def())
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .into_model::<EmployeeView>()
            .all(&*self.db_pool)
            .await?;
        Ok(employees)
    }

    #[instrument(skip(self, input))]
    pub async fn create_employee(&self, input: EmployeeInput) -> Result<i32, ServiceError> {
        let model: employee::ActiveModel = input.into();
        let result = employee::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(employee_id = result.last_insert_id, "Employee created");
        Ok(result.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i32) -> Result<u64, ServiceError> {
        let result = employee::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        info!(employee_id = id, rows = result.rows_affected, "Employee deleted");
        Ok(result.rows_affected)
    }
}
