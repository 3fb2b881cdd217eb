//! Category endpoint behavior: creation, uniqueness, and the
//! reference-guarded delete.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{json_request, request, response_json, setup_test_app};

#[tokio::test]
async fn test_create_category_returns_created_entity() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(json_request("POST", "/category", &json!({"name": "Engine"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Engine");
    assert!(body["id"].is_i64(), "created category carries a generated id");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_duplicate_category_name_conflicts() {
    let app = setup_test_app().await;

    let first = app
        .clone()
        .oneshot(json_request("POST", "/category", &json!({"name": "Brakes"})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(json_request("POST", "/category", &json!({"name": "Brakes"})))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = response_json(second).await;
    assert_eq!(body["error"], "Category already exists");

    // The name column remains a set: still exactly one row.
    let list = app.oneshot(request("GET", "/categories")).await.unwrap();
    let categories = response_json(list).await;
    assert_eq!(categories.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_category_is_not_found() {
    let app = setup_test_app().await;

    let response = app.oneshot(request("DELETE", "/category/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Category with ID '999' not found");
}

#[tokio::test]
async fn test_delete_category_blocked_by_spare_parts() {
    let app = setup_test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/category", &json!({"name": "Engine"})))
        .await
        .unwrap();
    let category = response_json(created).await;
    let id = category["id"].as_i64().unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/sparepart",
            &json!({"name": "Piston", "price": 500, "stock": 10, "category_id": id}),
        ))
        .await
        .unwrap();

    let delete = app
        .clone()
        .oneshot(request("DELETE", &format!("/category/{id}")))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::CONFLICT);

    // The record remains.
    let list = app.oneshot(request("GET", "/categories")).await.unwrap();
    let categories = response_json(list).await;
    assert_eq!(categories.as_array().unwrap().len(), 1);
    assert_eq!(categories[0]["name"], "Engine");
}

#[tokio::test]
async fn test_delete_unreferenced_category_succeeds() {
    let app = setup_test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/category", &json!({"name": "Exhaust"})))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_i64().unwrap();

    let delete = app
        .clone()
        .oneshot(request("DELETE", &format!("/category/{id}")))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let list = app.oneshot(request("GET", "/categories")).await.unwrap();
    let categories = response_json(list).await;
    assert!(categories.as_array().unwrap().is_empty());
}
