mod common;

use supermarket_admin::{
    dashboard::{ApiClient, Dashboard, DeleteOutcome, FormData, Tab},
    resource::Resource,
};

use common::TestApp;

fn form(fields: &[(&str, &str)]) -> FormData {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn dashboard_drives_a_live_server() {
    let app = TestApp::new().await;
    let (addr, server) = app.serve().await;
    let dashboard = Dashboard::new(ApiClient::new(format!("http://{addr}")).unwrap()).unwrap();

    dashboard.load_all().await;
    let initial = dashboard.show_tab(Tab::Stores).await.unwrap();
    assert!(initial.body.contains("No stores found"));

    let receipt = dashboard
        .submit_form(
            Resource::Stores,
            form(&[("storeName", "Main"), ("storeNumber", "1"), ("location", "Accra")]),
        )
        .await
        .expect("store is created");
    let store_id = receipt.id.expect("created id");

    let product = dashboard
        .submit_form(
            Resource::Products,
            form(&[
                ("productName", "Milo"),
                ("cost", "12.5"),
                ("quality", "A"),
                ("storeID", &store_id.to_string()),
                ("supplierID", ""),
            ]),
        )
        .await
        .expect("product is created");

    let products = dashboard.show_tab(Tab::Products).await.unwrap();
    assert!(products.body.contains("<td>Milo</td>"));
    assert!(products.body.contains("<td>GHS 12.50</td>"));
    assert!(products.body.contains("<td>Main</td>"));
    assert!(products.selects[0]
        .1
        .contains(&format!(r#"<option value="{store_id}">Main</option>"#)));

    let stats = dashboard.load_stats().await.expect("stats load");
    assert_eq!(stats.stores, 1);
    assert_eq!(stats.products, 1);

    let outcome = dashboard
        .delete(Resource::Products, product.id.unwrap(), &|_: &str| true)
        .await
        .expect("product is deleted");
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let products = dashboard.show_tab(Tab::Products).await.unwrap();
    assert!(products.body.contains("No products found"));
    assert_eq!(dashboard.snapshot(|s| s.stats.as_ref().map(|st| st.products)).await, Some(0));

    server.abort();
}
