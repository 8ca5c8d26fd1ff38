//! Data access for each resource. Every method issues a single statement.

use std::sync::Arc;

use crate::db::DbPool;

pub mod attendance;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod orders;
pub mod payments;
pub mod positions;
pub mod products;
pub mod sales;
pub mod stores;
pub mod suppliers;

/// One service per resource, sharing the connection pool.
#[derive(Clone)]
pub struct AppServices {
    pub suppliers: suppliers::SupplierService,
    pub stores: stores::StoreService,
    pub products: products::ProductService,
    pub employees: employees::EmployeeService,
    pub positions: positions::PositionService,
    pub customers: customers::CustomerService,
    pub orders: orders::OrderService,
    pub sales: sales::SaleService,
    pub payments: payments::PaymentService,
    pub attendance: attendance::AttendanceService,
    pub dashboard: dashboard::DashboardService,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            suppliers: suppliers::SupplierService::new(db_pool.clone()),
            stores: stores::StoreService::new(db_pool.clone()),
            products: products::ProductService::new(db_pool.clone()),
            employees: employees::EmployeeService::new(db_pool.clone()),
            positions: positions::PositionService::new(db_pool.clone()),
            customers: customers::CustomerService::new(db_pool.clone()),
            orders: orders::OrderService::new(db_pool.clone()),
            sales: sales::SaleService::new(db_pool.clone()),
            payments: payments::PaymentService::new(db_pool.clone()),
            attendance: attendance::AttendanceService::new(db_pool.clone()),
            dashboard: dashboard::DashboardService::new(db_pool),
        }
    }
}
