//! Checkout transaction integration tests.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use super::helpers::{TestApp, body_json, checkout_payload};

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_persists_order_with_items() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Lamb Biryani", "10.99").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": item_id, "quantity": 2}
            ]))),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let order = &body["data"];

    assert_eq!(order["status"], "pending");
    assert_eq!(order["subtotal"], "21.98");
    assert_eq!(order["tax"], "1.81");
    assert_eq!(order["total"], "23.79");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["name_snapshot"], "Lamb Biryani");
    assert_eq!(order["items"][0]["quantity"], 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_unknown_item_leaves_nothing_behind() {
    let app = TestApp::new().await;
    let known = app.seed_menu_item("Falafel Wrap", "7.25").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": known, "quantity": 1},
                {"menu_item_id": Uuid::new_v4(), "quantity": 1}
            ]))),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(orders, 0);
    assert_eq!(items, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_missing_fields_rejected_before_any_write() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Falafel Wrap", "7.25").await;

    let mut payload = checkout_payload(json!([{"menu_item_id": item_id, "quantity": 1}]));
    payload["customer_name"] = json!("");

    let response = app.request("POST", "/api/orders", None, Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(orders, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_empty_items_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/orders", None, Some(checkout_payload(json!([]))))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_floors_non_positive_quantity() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Mint Lemonade", "3.50").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": item_id, "quantity": 0}
            ]))),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["items"][0]["quantity"], 1);
    assert_eq!(body["data"]["subtotal"], "3.50");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_line_snapshot_survives_catalog_edit() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Chicken Shawarma", "9.49").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": item_id, "quantity": 1}
            ]))),
        )
        .await;
    let order_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Reprice and rename the catalog item after the fact.
    sqlx::query("UPDATE menu_items SET name = 'Renamed', price = 99.99 WHERE id = $1")
        .bind(item_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request("GET", &format!("/api/orders/{order_id}"), None, None)
        .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["items"][0]["name_snapshot"], "Chicken Shawarma");
    assert_eq!(body["data"]["items"][0]["unit_price"], "9.49");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_checkouts_yield_independent_orders() {
    let app = TestApp::new().await;
    let first = app.seed_menu_item("Beef Kofta", "11.00").await;
    let second = app.seed_menu_item("Veggie Platter", "8.00").await;

    let (a, b) = tokio::join!(
        app.request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": first, "quantity": 1}
            ]))),
        ),
        app.request(
            "POST",
            "/api/orders",
            None,
            Some(checkout_payload(json!([
                {"menu_item_id": second, "quantity": 2}
            ]))),
        ),
    );

    assert_eq!(a.status(), StatusCode::CREATED);
    assert_eq!(b.status(), StatusCode::CREATED);

    let a = body_json(a).await;
    let b = body_json(b).await;
    assert_ne!(a["data"]["id"], b["data"]["id"]);
    assert_eq!(a["data"]["subtotal"], "11.00");
    assert_eq!(b["data"]["subtotal"], "16.00");
}
