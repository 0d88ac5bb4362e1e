//! Integration tests for the dashboard aggregator

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_empty_dashboard_is_all_zeros() {
    let app = common::TestApp::new().await;

    let email = format!("empty_dash_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let (status, response) = app.get_auth("/api/v1/dashboard", &token).await;
    assert_eq!(status, StatusCode::OK, "{}", response);

    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(dashboard["total_workouts"], 0);
    assert_eq!(dashboard["total_calories_burned"], 0.0);
    assert_eq!(dashboard["avg_steps_per_day"], 0.0);
    assert_eq!(dashboard["avg_sleep_hours"], 0.0);
    assert!(dashboard["recent_workouts"].as_array().unwrap().is_empty());

    // Seven zero-filled days ending today
    let weekly = dashboard["weekly_activity"].as_array().unwrap();
    assert_eq!(weekly.len(), 7);
    let today = chrono::Utc::now().date_naive();
    assert_eq!(weekly[6]["date"], today.to_string().as_str());
    assert_eq!(
        weekly[0]["date"],
        (today - chrono::Duration::days(6)).to_string().as_str()
    );
    for day in weekly {
        assert_eq!(day["steps"], 0);
        assert_eq!(day["calories_burned"], 0.0);
        assert_eq!(day["sleep_hours"], 0.0);
        assert_eq!(day["water_ml"], 0);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_only_completed_workouts_count_toward_totals() {
    let app = common::TestApp::new().await;

    let email = format!("totals_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let cycling = app
        .seed_exercise("Cycling", "LEGS", "CARDIO", Some(12.0))
        .await;

    // One workout stays in progress, one gets completed
    let body = json!({ "exercises": [{ "exercise_id": cycling, "duration_seconds": 300 }] });
    app.post_auth("/api/v1/workouts", &body.to_string(), &token).await;

    let (_, response) = app.post_auth("/api/v1/workouts", &body.to_string(), &token).await;
    let workout: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = workout["id"].as_str().unwrap();
    app.post_auth(&format!("/api/v1/workouts/{}/complete", id), "", &token)
        .await;

    let (status, response) = app.get_auth("/api/v1/dashboard", &token).await;
    assert_eq!(status, StatusCode::OK);

    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(dashboard["total_workouts"], 1);
    // 12.0 cal/min * 5 min
    assert_eq!(dashboard["total_calories_burned"], 60.0);

    // Recent list shows both regardless of status
    let recent = dashboard["recent_workouts"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["exercise_count"], 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_recent_workouts_capped_at_five() {
    let app = common::TestApp::new().await;

    let email = format!("recent_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    for i in 0..7 {
        let body = json!({ "name": format!("session {}", i), "exercises": [] });
        app.post_auth("/api/v1/workouts", &body.to_string(), &token).await;
    }

    let (_, response) = app.get_auth("/api/v1/dashboard", &token).await;
    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();

    let recent = dashboard["recent_workouts"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["name"], "session 6");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weekly_activity_mixes_logged_and_zero_days() {
    let app = common::TestApp::new().await;

    let email = format!("weekly_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email, "secret1").await;

    let today = chrono::Utc::now().date_naive();
    let two_days_ago = today - chrono::Duration::days(2);

    let body = json!({
        "log_date": two_days_ago.to_string(),
        "steps": 12000,
        "sleep_hours": 8.0,
        "water_ml": 2000
    });
    app.post_auth("/api/v1/activity", &body.to_string(), &token).await;

    // A log outside the window must not appear
    let stale = json!({
        "log_date": (today - chrono::Duration::days(10)).to_string(),
        "steps": 99999
    });
    app.post_auth("/api/v1/activity", &stale.to_string(), &token).await;

    let (_, response) = app.get_auth("/api/v1/dashboard", &token).await;
    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();

    let weekly = dashboard["weekly_activity"].as_array().unwrap();
    assert_eq!(weekly.len(), 7);

    let logged = weekly
        .iter()
        .find(|d| d["date"] == two_days_ago.to_string().as_str())
        .unwrap();
    assert_eq!(logged["steps"], 12000);
    assert_eq!(logged["sleep_hours"], 8.0);
    assert_eq!(logged["water_ml"], 2000);

    let zero_days = weekly.iter().filter(|d| d["steps"] == 0).count();
    assert_eq!(zero_days, 6);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_requires_authentication() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
