use std::sync::Arc;

use sea_orm::{EntityTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{db::DbPool, entities::customer, errors::ServiceError, form};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
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
    #[serde(default, deserialize_with = "form::opt_string")]
    pub address: Option<String>,
}

impl From<CustomerInput> for customer::ActiveModel {
    fn from(input: CustomerInput) -> Self {
        customer::ActiveModel {
            customer_id: NotSet,
            first_name: Set(input.first_name),
            middle_name: Set(input.middle_name),
            last_name: Set(input.last_name),
            phonenumber: Set(input.phonenumber),
            email: Set(input.email),
            address: Set(input.address),
        }
    }
}

/// Service for managing customers
#[derive(Clone)]
pub struct CustomerService {
    db_pool: Arc<DbPool>,
}

impl CustomerService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        let customers = customer::Entity::find()
            .order_by_asc(customer::Column::LastName)
            .order_by_asc(customer::Column::FirstName)
            .all(&*self.db_pool)
            .await?;
        Ok(customers)
    }

    #[instrument(skip(self, input))]
    pub async fn create_customer(&self, input: CustomerInput) -> Result<i32, ServiceError> {
        let model: customer::ActiveModel = input.into();
        let result = customer::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(customer_id = result.last_insert_id, "Customer created");
        Ok(result.last_insert_id)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i32) -> Result<u64, ServiceError> {
        let result = customer::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        info!(customer_id = id, rows = result.rows_affected, "Customer deleted");
        Ok(result.rows_affected)
    }
}
