//! Audit trail integration tests — change records and request logs.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use super::helpers::{TestApp, body_json};

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_menu_update_writes_change_records() {
    let app = TestApp::new().await;
    let actor = Uuid::new_v4();
    let item_id = app.seed_menu_item("Falafel Wrap", "7.25").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/menu/{item_id}"),
            Some(actor),
            Some(json!({"name": "Falafel Deluxe", "price": "8.00"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<(String, Option<String>, Option<String>)> = sqlx::query_as(
        "SELECT field_name, previous_value, new_value FROM change_records \
         WHERE model_name = 'menu_item' AND record_id = $1 ORDER BY field_name",
    )
    .bind(item_id)
    .fetch_all(&app.db_pool)
    .await
    .unwrap();

    let fields: Vec<&str> = records.iter().map(|(f, _, _)| f.as_str()).collect();
    assert_eq!(fields, vec!["name", "price"]);
    assert_eq!(records[0].1.as_deref(), Some("Falafel Wrap"));
    assert_eq!(records[0].2.as_deref(), Some("Falafel Deluxe"));

    let actor_ids: Vec<Option<Uuid>> =
        sqlx::query_scalar("SELECT actor_id FROM change_records WHERE record_id = $1")
            .bind(item_id)
            .fetch_all(&app.db_pool)
            .await
            .unwrap();
    assert!(actor_ids.iter().all(|id| *id == Some(actor)));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_unchanged_update_writes_no_change_records() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Falafel Wrap", "7.25").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/menu/{item_id}"),
            Some(Uuid::new_v4()),
            Some(json!({"name": "Falafel Wrap"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM change_records")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_request_log_written_after_response() {
    let app = TestApp::new().await;
    let actor = Uuid::new_v4();

    let response = app.request("GET", "/api/menu", Some(actor), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The log insert is fire-and-forget; give the detached task a moment.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let (category, action, code, actor_id): (String, String, i32, Option<Uuid>) =
        sqlx::query_as(
            "SELECT category, action, response_code, actor_id FROM request_logs \
             ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_one(&app.db_pool)
        .await
        .unwrap();

    assert_eq!(category, "menu");
    assert_eq!(action, "get");
    assert_eq!(code, 200);
    assert_eq!(actor_id, Some(actor));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_request_log_captures_error_outcome() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let response = app
        .request("GET", &format!("/api/orders/{missing}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let (code, error_message): (i32, Option<String>) = sqlx::query_as(
        "SELECT response_code, error_message FROM request_logs \
         WHERE category = 'orders' ORDER BY created_at DESC LIMIT 1",
    )
    .fetch_one(&app.db_pool)
    .await
    .unwrap();

    assert_eq!(code, 404);
    assert_eq!(error_message.as_deref(), Some("Order not found"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_change_record_search_endpoint() {
    let app = TestApp::new().await;
    let item_id = app.seed_menu_item("Falafel Wrap", "7.25").await;

    app.request(
        "PUT",
        &format!("/api/menu/{item_id}"),
        Some(Uuid::new_v4()),
        Some(json!({"category": "street food"})),
    )
    .await;

    let response = app
        .request(
            "GET",
            "/api/audit/changes?model_name=menu_item",
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["field_name"], "category");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_owner_assignment_on_authenticated_create() {
    let app = TestApp::new().await;
    let actor = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            "/api/locations",
            Some(actor),
            Some(json!({
                "name": "Dearborn West",
                "address_line1": "400 Warren Ave",
                "city": "Dearborn",
                "state": "MI",
                "postal_code": "48126"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["owner_id"], json!(actor.to_string()));
}
