use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "CUSTOMER")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "customerID")]
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: Option<String>,
    #[sea_orm(column_name = "middleName")]
    pub middle_name: Option<String>,
    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,
    pub phonenumber: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
