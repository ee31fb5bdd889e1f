//! Item endpoint integration tests
//!
//! Covers item creation, the finish toggle, deletion, and the scoping
//! rules that keep items inside their list and their owner.

mod common;

use axum::http::StatusCode;
use serial_test::serial;

use common::auth_helpers::{create_test_user, token_header};
use common::database::TestDatabase;
use common::create_test_server;

async fn create_list(server: &axum_test::TestServer, token: &str, name: &str) -> String {
    let response = server
        .post("/lists")
        .add_header("Authorization", token_header(token))
        .json(&serde_json::json!({ "name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn create_item(
    server: &axum_test::TestServer,
    token: &str,
    list_id: &str,
    name: &str,
) -> String {
    let response = server
        .post(&format!("/lists/{}/items", list_id))
        .add_header("Authorization", token_header(token))
        .json(&serde_json::json!({ "name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[serial]
async fn test_create_item_appears_in_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;

    let item_id = create_item(&server, &user.token, &list_id, "visit grand canyon").await;

    let body: serde_json::Value = server
        .get(&format!("/lists/{}", list_id))
        .add_header("Authorization", token_header(&user.token))
        .await
        .json();

    let items = body["list"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"].as_str().unwrap(), item_id);
    assert_eq!(items[0]["name"], "visit grand canyon");
    assert_eq!(items[0]["finished_at"], serde_json::Value::Null);
}

#[tokio::test]
#[serial]
async fn test_create_item_in_missing_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;

    let response = server
        .post(&format!("/lists/{}/items", uuid::Uuid::new_v4()))
        .add_header("Authorization", token_header(&user.token))
        .json(&serde_json::json!({ "name": "visit grand canyon" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "List does not exist");
}

#[tokio::test]
#[serial]
async fn test_create_item_without_name_key() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;

    let response = server
        .post(&format!("/lists/{}/items", list_id))
        .add_header("Authorization", token_header(&user.token))
        .json(&serde_json::json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "Item name is required");
}

#[tokio::test]
#[serial]
async fn test_create_item_with_blank_name() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;

    let response = server
        .post(&format!("/lists/{}/items", list_id))
        .add_header("Authorization", token_header(&user.token))
        .json(&serde_json::json!({ "name": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "Item could not be created");
}

#[tokio::test]
#[serial]
async fn test_finish_toggles_and_restores() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;
    let item_id = create_item(&server, &user.token, &list_id, "visit yosemite").await;

    let finish_path = format!("/lists/{}/items/{}/finish", list_id, item_id);

    // First toggle: unfinished -> finished
    let response = server
        .put(&finish_path)
        .add_header("Authorization", token_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["finished_at"].is_string());

    // Second toggle: finished -> unfinished again
    let response = server
        .put(&finish_path)
        .add_header("Authorization", token_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["finished_at"], serde_json::Value::Null);
}

#[tokio::test]
#[serial]
async fn test_finish_missing_item() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;

    let response = server
        .put(&format!(
            "/lists/{}/items/{}/finish",
            list_id,
            uuid::Uuid::new_v4()
        ))
        .add_header("Authorization", token_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "Item does not exist");
}

#[tokio::test]
#[serial]
async fn test_finish_under_missing_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;
    let item_id = create_item(&server, &user.token, &list_id, "visit yosemite").await;

    let response = server
        .put(&format!(
            "/lists/{}/items/{}/finish",
            uuid::Uuid::new_v4(),
            item_id
        ))
        .add_header("Authorization", token_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "List does not exist");
}

#[tokio::test]
#[serial]
async fn test_delete_item() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let list_id = create_list(&server, &user.token, "Bucket List").await;
    let item_id = create_item(&server, &user.token, &list_id, "visit yosemite").await;

    let response = server
        .delete(&format!("/lists/{}/items/{}", list_id, item_id))
        .add_header("Authorization", token_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let body: serde_json::Value = server
        .get(&format!("/lists/{}", list_id))
        .add_header("Authorization", token_header(&user.token))
        .await
        .json();
    assert_eq!(body["list"]["items"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn test_delete_item_from_wrong_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let user = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let bucket = create_list(&server, &user.token, "Bucket List").await;
    let hobbies = create_list(&server, &user.token, "hobbies").await;
    let item_id = create_item(&server, &user.token, &bucket, "visit yosemite").await;

    let response = server
        .delete(&format!("/lists/{}/items/{}", hobbies, item_id))
        .add_header("Authorization", token_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    // Item survives in its real list
    let body: serde_json::Value = server
        .get(&format!("/lists/{}", bucket))
        .add_header("Authorization", token_header(&user.token))
        .await
        .json();
    assert_eq!(body["list"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_delete_item_under_foreign_user() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());
    let owner = create_test_user(db.pool(), "asdf@asdf.com", "asdfasdf").await;
    let other = create_test_user(db.pool(), "qwerty@qwerty.com", "qwerty").await;
    let list_id = create_list(&server, &owner.token, "Bucket List").await;
    let item_id = create_item(&server, &owner.token, &list_id, "visit yosemite").await;

    let response = server
        .delete(&format!("/lists/{}/items/{}", list_id, item_id))
        .add_header("Authorization", token_header(&other.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_message"], "List does not exist");

    // Item untouched for the owner
    let shown: serde_json::Value = server
        .get(&format!("/lists/{}", list_id))
        .add_header("Authorization", token_header(&owner.token))
        .await
        .json();
    assert_eq!(shown["list"]["items"].as_array().unwrap().len(), 1);
}
