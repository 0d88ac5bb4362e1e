//! Integration tests for the activity log endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_activity_defaults_to_today() {
    let app = common::TestApp::new().await;

    let email = format!("activity_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let body = json!({ "steps": 8000, "sleep_hours": 7.5 });
    let (status, response) = app.post_auth("/api/v1/activity", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::CREATED, "{}", response);

    let log: serde_json::Value = serde_json::from_str(&response).unwrap();
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(log["log_date"], today.as_str());
    assert_eq!(log["steps"], 8000);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_activity_same_date_overlays() {
    let app = common::TestApp::new().await;

    let email = format!("upsert_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let first = json!({ "log_date": "2024-03-05", "steps": 4000, "water_ml": 1000 });
    let (status, _) = app.post_auth("/api/v1/activity", &first.to_string(), &token).await;
    assert_eq!(status, StatusCode::CREATED);

    // Second write for the same date overlays provided fields only
    let second = json!({ "log_date": "2024-03-05", "steps": 9000 });
    let (status, response) = app.post_auth("/api/v1/activity", &second.to_string(), &token).await;
    assert_eq!(status, StatusCode::CREATED);

    let log: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(log["steps"], 9000);
    assert_eq!(log["water_ml"], 1000);

    // Still a single row for that day
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM activity_logs WHERE log_date = '2024-03-05'")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_log_by_date_found_and_missing() {
    let app = common::TestApp::new().await;

    let email = format!("bydate_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let body = json!({ "log_date": "2024-03-06", "steps": 6000 });
    app.post_auth("/api/v1/activity", &body.to_string(), &token).await;

    let (status, response) = app.get_auth("/api/v1/activity/date/2024-03-06", &token).await;
    assert_eq!(status, StatusCode::OK);
    let log: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(log["steps"], 6000);

    let (status, _) = app.get_auth("/api/v1/activity/date/2024-03-07", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_range_is_inclusive_and_ascending() {
    let app = common::TestApp::new().await;

    let email = format!("range_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    for (date, steps) in [("2024-03-03", 1000), ("2024-03-01", 3000), ("2024-03-02", 2000)] {
        let body = json!({ "log_date": date, "steps": steps });
        app.post_auth("/api/v1/activity", &body.to_string(), &token).await;
    }

    let (status, response) = app
        .get_auth("/api/v1/activity/range?start=2024-03-01&end=2024-03-03", &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let logs: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["log_date"], "2024-03-01");
    assert_eq!(logs[2]["log_date"], "2024-03-03");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_sparse_update_leaves_other_fields_untouched() {
    let app = common::TestApp::new().await;

    let email = format!("patch_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let body = json!({
        "log_date": "2024-03-08",
        "steps": 4000,
        "sleep_hours": 6.5,
        "water_ml": 1500,
        "mood": "tired"
    });
    let (_, response) = app.post_auth("/api/v1/activity", &body.to_string(), &token).await;
    let log: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = log["id"].as_str().unwrap();

    let patch = json!({ "steps": 5000 });
    let (status, response) = app
        .put_auth(&format!("/api/v1/activity/{}", id), &patch.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["steps"], 5000);
    assert_eq!(updated["sleep_hours"], 6.5);
    assert_eq!(updated["water_ml"], 1500);
    assert_eq!(updated["mood"], "tired");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_unknown_log_not_found() {
    let app = common::TestApp::new().await;

    let email = format!("patch404_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let patch = json!({ "steps": 100 });
    let (status, _) = app
        .put_auth(
            &format!("/api/v1/activity/{}", uuid::Uuid::new_v4()),
            &patch.to_string(),
            &token,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_negative_steps_rejected() {
    let app = common::TestApp::new().await;

    let email = format!("invalid_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let body = json!({ "steps": -10 });
    let (status, _) = app.post_auth("/api/v1/activity", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
