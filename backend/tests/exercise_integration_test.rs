//! Integration tests for the exercise catalog endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_catalog_reads_and_filters() {
    let app = common::TestApp::new().await;

    let email = format!("catalog_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    app.seed_exercise("Bench Press", "CHEST", "STRENGTH", Some(5.0)).await;
    app.seed_exercise("Incline Press", "CHEST", "STRENGTH", Some(5.5)).await;
    app.seed_exercise("Burpee", "FULL_BODY", "HIIT", Some(12.0)).await;

    let (status, response) = app.get_auth("/api/v1/exercises", &token).await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(all.len(), 3);

    let (status, response) = app.get_auth("/api/v1/exercises/muscle-group/chest", &token).await;
    assert_eq!(status, StatusCode::OK);
    let chest: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(chest.len(), 2);

    let (status, response) = app.get_auth("/api/v1/exercises/category/HIIT", &token).await;
    assert_eq!(status, StatusCode::OK);
    let hiit: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(hiit.len(), 1);
    assert_eq!(hiit[0]["name"], "Burpee");

    // Case-insensitive substring search
    let (status, response) = app.get_auth("/api/v1/exercises/search?q=press", &token).await;
    assert_eq!(status, StatusCode::OK);
    let found: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(found.len(), 2);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_unknown_filter_value_is_bad_request() {
    let app = common::TestApp::new().await;

    let email = format!("badfilter_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let (status, _) = app.get_auth("/api/v1/exercises/muscle-group/quads", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get_auth("/api/v1/exercises/category/yoga", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_unknown_exercise_not_found() {
    let app = common::TestApp::new().await;

    let email = format!("missing_ex_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let (status, _) = app
        .get_auth(&format!("/api/v1/exercises/{}", uuid::Uuid::new_v4()), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_writes_require_admin_role() {
    let app = common::TestApp::new().await;

    let email = format!("nonadmin_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let body = json!({
        "name": "Deadlift",
        "muscle_group": "BACK",
        "category": "STRENGTH"
    });

    let (status, _) = app.post_auth("/api/v1/exercises", &body.to_string(), &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_create_update_delete() {
    let app = common::TestApp::new().await;

    let email = format!("admin_{}@example.com", uuid::Uuid::new_v4());
    let password = "secret1";
    app.register_user(&email, password).await;
    let token = app.promote_to_admin(&email, password).await;

    // Create
    let body = json!({
        "name": "Deadlift",
        "muscle_group": "BACK",
        "category": "STRENGTH",
        "calories_per_minute": 7.0,
        "difficulty": "hard"
    });
    let (status, response) = app.post_auth("/api/v1/exercises", &body.to_string(), &token).await;
    assert_eq!(status, StatusCode::CREATED, "{}", response);
    let exercise: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = exercise["id"].as_str().unwrap().to_string();
    assert_eq!(exercise["muscle_group"], "BACK");

    // Full update replaces every mutable field
    let update = json!({
        "name": "Romanian Deadlift",
        "muscle_group": "LEGS",
        "category": "STRENGTH"
    });
    let (status, response) = app
        .put_auth(&format!("/api/v1/exercises/{}", id), &update.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["name"], "Romanian Deadlift");
    assert_eq!(updated["muscle_group"], "LEGS");
    // Omitted optional fields are cleared by the full update
    assert!(updated.get("calories_per_minute").is_none() || updated["calories_per_minute"].is_null());

    // Delete
    let (status, _) = app.delete_auth(&format!("/api/v1/exercises/{}", id), &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get_auth(&format!("/api/v1/exercises/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
