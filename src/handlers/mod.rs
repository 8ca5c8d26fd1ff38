//! HTTP handlers. Each one validates nothing beyond the body shape and
//! delegates a single statement to its service.

use axum::Router;

use crate::{resource::Resource, AppState};

pub mod attendance;
pub mod common;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod orders;
pub mod payments;
pub mod positions;
pub mod products;
pub mod sales;
pub mod stores;
pub mod suppliers;

fn nest_resource(router: Router<AppState>, resource: Resource, routes: Router<AppState>) -> Router<AppState> {
    router.nest(&format!("/{}", resource.path()), routes)
}

/// Every route below `/api`
pub fn api_routes() -> Router<AppState> {
    let router = Router::new().nest("/dashboard", dashboard::dashboard_routes());
    [
        (Resource::Suppliers, suppliers::supplier_routes()),
        (Resource::Stores, stores::store_routes()),
        (Resource::Products, products::product_routes()),
        (Resource::Employees, employees::employee_routes()),
        (Resource::Positions, positions::position_routes()),
        (Resource::Customers, customers::customer_routes()),
        (Resource::Orders, orders::order_routes()),
        (Resource::Sales, sales::sale_routes()),
        (Resource::Payments, payments::payment_routes()),
        (Resource::Attendance, attendance::attendance_routes()),
    ]
    .into_iter()
    .fold(router, |router, (resource, routes)| {
        nest_resource(router, resource, routes)
    })
}
