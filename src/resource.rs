//! The record collections exposed under `/api`.
//!
//! Shared by the HTTP handlers and the dashboard client so that route paths,
//! identifier field names and user-facing messages stay in one place.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Suppliers,
    Stores,
    Products,
    Employees,
    Positions,
    Customers,
    Orders,
    Sales,
    Payments,
    Attendance,
}

impl Resource {
    /// Path segment below `/api`, e.g. `suppliers`.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Suppliers => "suppliers",
            Resource::Stores => "stores",
            Resource::Products => "products",
            Resource::Employees => "employees",
            Resource::Positions => "positions",
            Resource::Customers => "customers",
            Resource::Orders => "orders",
            Resource::Sales => "sales",
            Resource::Payments => "payments",
            Resource::Attendance => "attendance",
        }
    }

    /// Lower-case singular noun used in error messages and prompts.
    pub fn singular(self) -> &'static str {
        match self {
            Resource::Suppliers => "supplier",
            Resource::Stores => "store",
            Resource::Products => "product",
            Resource::Employees => "employee",
            Resource::Positions => "position",
            Resource::Customers => "customer",
            Resource::Orders => "order",
            Resource::Sales => "sale",
            Resource::Payments => "payment",
            Resource::Attendance => "attendance",
        }
    }

    /// Capitalised singular noun used in success messages.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Suppliers => "Supplier",
            Resource::Stores => "Store",
            Resource::Products => "Product",
            Resource::Employees => "Employee",
            Resource::Positions => "Position",
            Resource::Customers => "Customer",
            Resource::Orders => "Order",
            Resource::Sales => "Sale",
            Resource::Payments => "Payment",
            Resource::Attendance => "Attendance",
        }
    }

    /// Name of the identifier field in rows and in create responses.
    pub fn id_field(self) -> &'static str {
        match self {
            Resource::Suppliers => "supplierID",
            Resource::Stores => "storeID",
            Resource::Products => "productID",
            Resource::Employees => "employeeID",
            Resource::Positions => "positionID",
            Resource::Customers => "customerID",
            Resource::Orders => "orderID",
            Resource::Sales => "saleID",
            Resource::Payments => "paymentID",
            Resource::Attendance => "attendanceID",
        }
    }

    pub fn supports_create(self) -> bool {
        !matches!(self, Resource::Attendance)
    }

    pub fn supports_update(self) -> bool {
        matches!(self, Resource::Suppliers | Resource::Products)
    }

    pub fn supports_delete(self) -> bool {
        matches!(
            self,
            Resource::Suppliers
                | Resource::Stores
                | Resource::Products
                | Resource::Employees
                | Resource::Customers
                | Resource::Orders
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_route_path() {
        for resource in Resource::iter() {
            assert_eq!(resource.to_string(), resource.path());
            assert_eq!(Resource::from_str(resource.path()).unwrap(), resource);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Resource::from_str("Suppliers").unwrap(), Resource::Suppliers);
        assert!(Resource::from_str("widgets").is_err());
    }

    #[test]
    fn write_capabilities() {
        assert!(Resource::Suppliers.supports_update());
        assert!(Resource::Products.supports_update());
        assert!(!Resource::Stores.supports_update());
        assert!(Resource::Positions.supports_create());
        assert!(!Resource::Positions.supports_delete());
        assert!(!Resource::Attendance.supports_create());
        assert!(!Resource::Sales.supports_delete());
    }
}
