//! Read models returned by the list endpoints that join related tables.
//!
//! These are separate from the table models in [`crate::entities`]: they are
//! never written back, and carry display columns pulled from joined rows.
//! Field aliases in the queries match the snake_case field names here, while
//! the JSON names follow the stored column names.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(rename = "productID")]
    pub product_id: i32,
    pub product_name: Option<String>,
    pub cost: Option<Decimal>,
    pub description: Option<String>,
    pub quality: Option<String>,
    #[serde(rename = "storeID")]
    pub store_id: Option<i32>,
    #[serde(rename = "supplierID")]
    pub supplier_id: Option<i32>,
    pub store_name: Option<String>,
    pub supplier_first_name: Option<String>,
    pub supplier_last_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    #[serde(rename = "employeeID")]
    pub employee_id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub phonenumber: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "storeID")]
    pub store_id: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "positionID")]
    pub position_id: Option<i32>,
    pub dob: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub store_name: Option<String>,
    pub position_name: Option<String>,
}

/// `productName` is the live product name when the product still exists,
/// otherwise the name captured on the order.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(rename = "orderID")]
    pub order_id: i32,
    pub order_date: Option<NaiveDate>,
    pub product_name: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleView {
    #[serde(rename = "saleID")]
    pub sale_id: i32,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub invoice_number: Option<i32>,
    pub total_amount: Option<Decimal>,
    pub customer_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    #[serde(rename = "paymentID")]
    pub payment_id: i32,
    pub payment_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub time: Option<NaiveTime>,
    pub method: Option<String>,
    #[serde(rename = "paymentMethodID")]
    pub payment_method_id: Option<i32>,
    pub cash: Option<bool>,
    pub momo: Option<bool>,
    pub bank: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    #[serde(rename = "attendanceID")]
    pub attendance_id: i32,
    #[serde(rename = "employeeID")]
    pub employee_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Headline figures for the dashboard landing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub suppliers: u64,
    pub stores: u64,
    pub products: u64,
    pub employees: u64,
    pub customers: u64,
    pub orders: u64,
    /// Sum of invoice totals; serialized as a JSON number.
    pub total_revenue: f64,
    /// Sales dated within the trailing seven days.
    pub recent_sales: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_view_uses_column_names_in_json() {
        let view = ProductView {
            product_id: 4,
            product_name: Some("Milo".into()),
            cost: Some(Decimal::new(2550, 2)),
            description: None,
            quality: Some("A".into()),
            store_id: Some(1),
            supplier_id: None,
            store_name: Some("Main".into()),
            supplier_first_name: None,
            supplier_last_name: None,
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["productID"], json!(4));
        assert_eq!(value["storeID"], json!(1));
        assert_eq!(value["storeName"], json!("Main"));
        assert_eq!(value["supplierFirstName"], json!(null));
    }

    #[test]
    fn stats_serialize_camel_case_numbers() {
        let stats = DashboardStats {
            suppliers: 2,
            total_revenue: 1250.5,
            recent_sales: 3,
            ..Default::default()
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalRevenue"], json!(1250.5));
        assert_eq!(value["recentSales"], json!(3));
        assert_eq!(value["orders"], json!(0));
    }
}
