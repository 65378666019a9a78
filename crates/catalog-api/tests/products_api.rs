//! End-to-end tests for the product endpoints, driven through the full router.

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use catalog_api::{create_router, AppState};
use serde_json::{json, Value};

fn server() -> TestServer {
    TestServer::new(create_router(AppState::default())).unwrap()
}

fn pen() -> Value {
    json!({
        "product_name": "Pen",
        "product_description": "Blue ink",
        "product_price": 1.5
    })
}

async fn product_count(server: &TestServer) -> usize {
    server
        .get("/products")
        .await
        .json::<Vec<Value>>()
        .len()
}

#[tokio::test]
async fn list_starts_empty() {
    let server = server();

    let response = server.get("/products").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn create_assigns_first_id() {
    let server = server();

    let response = server.post("/products").json(&pen()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": 1.5
        })
    );
}

#[tokio::test]
async fn created_product_can_be_fetched() {
    let server = server();
    let created = server.post("/products").json(&pen()).await.json::<Value>();

    let response = server.get("/products/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn ids_increase_across_creates_and_deletes() {
    let server = server();

    let mut last = 0;
    for _ in 0..3 {
        let id = server.post("/products").json(&pen()).await.json::<Value>()["id"]
            .as_u64()
            .unwrap();
        assert!(id > last);
        last = id;
    }

    server.delete("/products/3").await;
    let id = server.post("/products").json(&pen()).await.json::<Value>()["id"]
        .as_u64()
        .unwrap();
    assert_eq!(id, 4);
}

#[tokio::test]
async fn list_returns_products_in_insertion_order() {
    let server = server();
    server.post("/products").json(&pen()).await;
    server
        .post("/products")
        .json(&json!({
            "product_name": "Pad",
            "product_description": "Squared paper",
            "product_price": 3
        }))
        .await;

    let products = server.get("/products").await.json::<Vec<Value>>();

    let names: Vec<&str> = products
        .iter()
        .map(|p| p["product_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pen", "Pad"]);
}

#[tokio::test]
async fn get_unknown_id_is_json_not_found() {
    let server = server();

    let response = server.get("/products/99").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Product not found"})
    );
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let server = server();
    server.post("/products").json(&pen()).await;

    assert_eq!(
        server.get("/products/abc").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.delete("/products/abc").await.text(),
        "Product not found"
    );
    assert_eq!(product_count(&server).await, 1);
}

#[tokio::test]
async fn id_is_read_from_leading_digits() {
    let server = server();
    let created = server.post("/products").json(&pen()).await.json::<Value>();

    for path in ["/products/1.5", "/products/1abc", "/products/%201", "/products/+1"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "path: {path}");
        assert_eq!(response.json::<Value>(), created, "path: {path}");
    }

    let response = server
        .put("/products/1.5")
        .json(&json!({"product_price": 2.0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["id"], json!(1));

    assert_eq!(
        server.get("/products/-1").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn trailing_slash_serves_the_collection() {
    let server = server();

    let response = server.post("/products/").json(&pen()).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server.get("/products/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>().len(), 1);
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected() {
    let server = server();

    let response = server
        .post("/products")
        .json(&json!({"product_name": "X"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Missing required fields"})
    );
    assert_eq!(product_count(&server).await, 0);
}

#[tokio::test]
async fn create_without_body_is_missing_fields() {
    let server = server();

    let response = server.post("/products").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Missing required fields"})
    );
}

#[tokio::test]
async fn create_with_negative_price_is_rejected() {
    let server = server();
    server.post("/products").json(&pen()).await;

    let response = server
        .post("/products")
        .json(&json!({
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": -1
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Product price must be a positive number"})
    );
    assert_eq!(product_count(&server).await, 1);
}

#[tokio::test]
async fn create_with_string_price_is_rejected() {
    let server = server();

    let response = server
        .post("/products")
        .json(&json!({
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": "1.5"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Product price must be a positive number"})
    );
}

#[tokio::test]
async fn create_with_null_price_is_rejected_as_bad_price() {
    let server = server();

    let response = server
        .post("/products")
        .json(&json!({
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": null
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Product price must be a positive number"})
    );
    assert_eq!(product_count(&server).await, 0);
}

#[tokio::test]
async fn create_with_non_json_content_type_sees_no_fields() {
    let server = server();

    let response = server
        .post("/products")
        .text(pen().to_string())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Missing required fields"})
    );
    assert_eq!(product_count(&server).await, 0);
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let server = server();

    let response = server
        .post("/products")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Malformed JSON body"})
    );
}

#[tokio::test]
async fn update_merges_onto_existing_record() {
    let server = server();
    server.post("/products").json(&pen()).await;

    let response = server
        .put("/products/1")
        .json(&json!({"product_price": 2.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let expected = json!({
        "id": 1,
        "product_name": "Pen",
        "product_description": "Blue ink",
        "product_price": 2.0
    });
    assert_eq!(response.json::<Value>(), expected);
    assert_eq!(server.get("/products/1").await.json::<Value>(), expected);
}

#[tokio::test]
async fn update_cannot_change_id() {
    let server = server();
    server.post("/products").json(&pen()).await;

    let response = server
        .put("/products/1")
        .json(&json!({"id": 50, "product_name": "Quill"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["id"], json!(1));
    assert_eq!(
        server.get("/products/50").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn update_unknown_id_is_plain_text_not_found() {
    let server = server();
    server.post("/products").json(&pen()).await;

    let response = server
        .put("/products/99")
        .json(&json!({"product_price": 2.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Product not found");
    assert_eq!(
        server.get("/products").await.json::<Value>(),
        json!([{
            "id": 1,
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": 1.5
        }])
    );
}

#[tokio::test]
async fn update_with_invalid_price_leaves_record_unchanged() {
    let server = server();
    let created = server.post("/products").json(&pen()).await.json::<Value>();

    let response = server
        .put("/products/1")
        .json(&json!({"product_price": -3}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Product price must be a positive number"})
    );
    assert_eq!(server.get("/products/1").await.json::<Value>(), created);
}

#[tokio::test]
async fn delete_returns_removed_record() {
    let server = server();
    server.post("/products").json(&pen()).await;
    server
        .put("/products/1")
        .json(&json!({"product_price": 2.0}))
        .await;

    let response = server.delete("/products/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "product_name": "Pen",
            "product_description": "Blue ink",
            "product_price": 2.0
        })
    );
    assert_eq!(
        server.get("/products/1").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_unknown_id_is_plain_text_not_found() {
    let server = server();

    let response = server.delete("/products/1").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Product not found");
}

#[tokio::test]
async fn unknown_routes_are_invalid() {
    let server = server();

    for response in [
        server.get("/").await,
        server.get("/users").await,
        server.post("/products/1").await,
        server.delete("/products").await,
        server.method(Method::PATCH, "/products/1").await,
    ] {
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Invalid route");
    }
}

#[tokio::test]
async fn servers_do_not_share_state() {
    let first = server();
    let second = server();

    first.post("/products").json(&pen()).await;

    assert_eq!(product_count(&first).await, 1);
    assert_eq!(product_count(&second).await, 0);
}
