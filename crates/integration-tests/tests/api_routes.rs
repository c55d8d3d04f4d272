//! End-to-end tests for the order API over HTTP.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};
use tuber_treats_integration_tests::TestServer;

async fn get_json(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let resp = server.client.get(server.url(path)).send().await.unwrap();
    let status = resp.status();
    let body = resp.json().await.unwrap_or(Value::Null);
    (status, body)
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_customer_create_then_get() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/customers"))
        .json(&json!({ "name": "Carol", "address": "789 Yam St" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()["location"], "/customers/3");
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created, json!({ "id": 3, "name": "Carol", "address": "789 Yam St" }));

    let (status, body) = get_json(&server, "/customers/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Carol");
    assert_eq!(body["orders"], json!([]));
}

#[tokio::test]
async fn test_first_customer_in_empty_store_gets_id_one() {
    let server = TestServer::start_empty().await;

    let resp = server
        .client
        .post(server.url("/customers"))
        .json(&json!({ "name": "Carol", "address": "789 Yam St" }))
        .send()
        .await
        .unwrap();

    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_customer_delete() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .delete(server.url("/customers/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (_, list) = get_json(&server, "/customers").await;
    let ids: Vec<_> = list.as_array().unwrap().iter().map(|c| c["id"].clone()).collect();
    assert_eq!(ids, [json!(1)]);

    let resp = server
        .client
        .delete(server.url("/customers/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_detail_lists_orders() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server, "/customers/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "123 Spud Ln");
    assert_eq!(body["orders"][0]["id"], 1);
    assert_eq!(body["orders"][0]["toppingNames"], json!(["Chives", "Cheddar"]));
}

// ============================================================================
// Toppings & drivers
// ============================================================================

#[tokio::test]
async fn test_toppings() {
    let server = TestServer::start().await;

    let (status, list) = get_json(&server, "/toppings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 3);

    let (_, topping) = get_json(&server, "/toppings/2").await;
    assert_eq!(topping, json!({ "id": 2, "name": "Cheddar" }));

    let (status, _) = get_json(&server, "/toppings/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_driver_deliveries_follow_assignment() {
    let server = TestServer::start().await;

    let (_, before) = get_json(&server, "/tuberdrivers/1").await;
    assert_eq!(before["deliveries"], json!([]));

    let resp = server
        .client
        .put(server.url("/tuberorders/1?driverId=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order["driverName"], "Driver Dan");

    let (_, after) = get_json(&server, "/tuberdrivers/1").await;
    assert_eq!(after["name"], "Driver Dan");
    assert_eq!(after["deliveries"][0]["id"], 1);
    assert_eq!(after["deliveries"][0]["customerName"], "Alice");

    let (status, _) = get_json(&server, "/tuberdrivers/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_order_create() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/tuberorders"))
        .json(&json!({ "customerId": 1, "toppingIds": [1, 2] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()["location"], "/tuberorders/2");
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order["customerName"], "Alice");
    assert_eq!(order["toppingNames"], json!(["Chives", "Cheddar"]));
    assert!(order.get("driverName").is_none());
    assert!(order["placedOn"].is_string());

    let (_, list) = get_json(&server, "/tuberorders").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_order_create_unknown_customer() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/tuberorders"))
        .json(&json!({ "customerId": 77, "toppingIds": [1] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (_, list) = get_json(&server, "/tuberorders").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_assign_unknown_driver() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .put(server.url("/tuberorders/1?driverId=99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (_, order) = get_json(&server, "/tuberorders/1").await;
    assert!(order.get("driverName").is_none());

    let resp = server
        .client
        .put(server.url("/tuberorders/42?driverId=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_complete() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/tuberorders/1/complete"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Order 1 completed and removed.");

    let (status, _) = get_json(&server, "/tuberorders/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, links) = get_json(&server, "/tubertoppings").await;
    assert_eq!(links, json!([]));

    let resp = server
        .client
        .post(server.url("/tuberorders/1/complete"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Order toppings
// ============================================================================

#[tokio::test]
async fn test_attach_topping() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/tubertoppings?orderId=1&toppingId=3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let link: Value = resp.json().await.unwrap();
    assert_eq!(link, json!({ "id": 3, "orderId": 1, "toppingName": "Sour Cream" }));

    let (_, order) = get_json(&server, "/tuberorders/1").await;
    assert_eq!(order["toppingNames"], json!(["Chives", "Cheddar", "Sour Cream"]));
}

#[tokio::test]
async fn test_attach_unknown_topping_does_not_mutate() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/tubertoppings?orderId=1&toppingId=99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (_, order) = get_json(&server, "/tuberorders/1").await;
    assert_eq!(order["toppingNames"], json!(["Chives", "Cheddar"]));
}

#[tokio::test]
async fn test_detach_topping() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .delete(server.url("/tubertoppings?orderId=1&toppingId=3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, order) = get_json(&server, "/tuberorders/1").await;
    assert_eq!(order["toppingNames"], json!(["Chives", "Cheddar"]));

    let resp = server
        .client
        .delete(server.url("/tubertoppings?orderId=1&toppingId=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Topping removed from order.");

    let (_, order) = get_json(&server, "/tuberorders/1").await;
    assert_eq!(order["toppingNames"], json!(["Chives"]));
}

// ============================================================================
// Process surface
// ============================================================================

#[tokio::test]
async fn test_health_and_request_id() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .get(server.url("/health"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-request-id"], "trace-me");
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let server = TestServer::start().await;

    let requests = (0..20).map(|i| {
        server
            .client
            .post(server.url("/customers"))
            .json(&json!({ "name": format!("Customer {i}"), "address": "Somewhere" }))
            .send()
    });

    let mut ids = Vec::new();
    for resp in futures_join(requests).await {
        let body: Value = resp.unwrap().json().await.unwrap();
        ids.push(body["id"].as_i64().unwrap());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(server.state.store().read().await.customers.len(), 22);
}

/// Drive all request futures concurrently on spawned tasks.
async fn futures_join<F>(requests: impl Iterator<Item = F>) -> Vec<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handles: Vec<_> = requests.map(tokio::spawn).collect();
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    results
}
