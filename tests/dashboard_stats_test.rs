mod common;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};
use serde_json::json;
use supermarket_admin::{
    entities::{invoice, sale},
    resource::Resource,
    views::DashboardStats,
};

use axum::http::StatusCode;
use common::TestApp;

async fn stats(app: &TestApp) -> DashboardStats {
    let (status, body) = app.get("/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK, "stats failed: {body}");
    serde_json::from_value(body).expect("stats body decodes")
}

async fn seed_invoice(app: &TestApp, total: Option<Decimal>) -> i32 {
    invoice::ActiveModel {
        invoice_id: NotSet,
        customer_id: Set(None),
        customer_name: Set(Some("Walk-in".into())),
        total_amount: Set(total),
        invoice_date: Set(Some(Utc::now().date_naive())),
    }
    .insert(app.db())
    .await
    .expect("seed invoice")
    .invoice_id
}

async fn seed_sale(app: &TestApp, date: NaiveDate) {
    sale::ActiveModel {
        sale_id: NotSet,
        date: Set(Some(date)),
        time: Set(None),
        invoice_number: Set(None),
    }
    .insert(app.db())
    .await
    .expect("seed sale");
}

#[tokio::test]
async fn empty_store_reports_zeros() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "suppliers": 0,
            "stores": 0,
            "products": 0,
            "employees": 0,
            "customers": 0,
            "orders": 0,
            "totalRevenue": 0.0,
            "recentSales": 0,
        })
    );
}

#[tokio::test]
async fn counts_follow_created_records() {
    let app = TestApp::new().await;
    app.create(Resource::Stores, json!({"storeName": "Main"})).await;
    app.create(Resource::Stores, json!({"storeName": "Osu"})).await;
    app.create(Resource::Suppliers, json!({"firstName": "Ama"})).await;
    let order = app
        .create(Resource::Orders, json!({"productName": "Rice", "amount": "10"}))
        .await;

    let current = stats(&app).await;
    assert_eq!(current.stores, 2);
    assert_eq!(current.suppliers, 1);
    assert_eq!(current.orders, 1);
    assert_eq!(current.products, 0);

    app.delete(&format!("/api/orders/{order}")).await;
    assert_eq!(stats(&app).await.orders, 0);
}

#[tokio::test]
async fn revenue_sums_invoice_totals() {
    let app = TestApp::new().await;
    seed_invoice(&app, Some(Decimal::new(10050, 2))).await;
    seed_invoice(&app, Some(Decimal::new(4950, 2))).await;
    seed_invoice(&app, None).await;

    let current = stats(&app).await;
    assert!((current.total_revenue - 150.0).abs() < 1e-9, "{}", current.total_revenue);
}

#[tokio::test]
async fn recent_sales_cover_the_trailing_week() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();
    seed_sale(&app, today).await;
    seed_sale(&app, today - Duration::days(3)).await;
    seed_sale(&app, today - Duration::days(30)).await;

    assert_eq!(stats(&app).await.recent_sales, 2);
}

#[tokio::test]
async fn recent_sales_window_includes_its_seventh_day() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();
    seed_sale(&app, today - Duration::days(7)).await;
    seed_sale(&app, today - Duration::days(8)).await;

    assert_eq!(stats(&app).await.recent_sales, 1);
}

#[tokio::test]
async fn store_failures_surface_as_fetch_errors() {
    let app = TestApp::new().await;
    app.db()
        .execute_unprepared(r#"DROP TABLE "SALE""#)
        .await
        .expect("drop sale table");

    let (status, body) = app.get("/api/sales").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch sales"}));

    let (status, body) = app.get("/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch dashboard stats"}));

    let (status, _) = app.get("/api/stores").await;
    assert_eq!(status, StatusCode::OK);
}
