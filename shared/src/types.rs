//! API request and response types
//!
//! Every payload shape is an explicit typed record; handlers never build
//! ad-hoc key-value maps.

use crate::models::{ExerciseCategory, MuscleGroup, UserRole, WorkoutStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Authentication
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

// ============================================================================
// Exercise Catalog
// ============================================================================

/// Exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub muscle_group: MuscleGroup,
    pub category: ExerciseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_minute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Create a catalog exercise (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub muscle_group: MuscleGroup,
    pub category: ExerciseCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_minute: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Full update of a catalog exercise (admin only)
///
/// Every mutable field is replaced, not overlaid.
pub type UpdateExerciseRequest = CreateExerciseRequest;

// ============================================================================
// Workouts
// ============================================================================

/// One exercise entry submitted as part of a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntryRequest {
    pub exercise_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create a workout from an ordered exercise list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<WorkoutEntryRequest>,
}

/// One performed exercise within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntryResponse {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// Derived burn, rounded to 1 decimal for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub order_index: i32,
}

/// Full workout detail including its ordered entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: WorkoutStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    pub exercise_count: usize,
    pub exercises: Vec<WorkoutEntryResponse>,
    pub created_at: DateTime<Utc>,
}

/// Workout list item (entries reduced to a count)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummaryResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: WorkoutStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    pub exercise_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Created-at range filter for workout queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRangeQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

// ============================================================================
// Activity Logs
// ============================================================================

/// Log (or upsert) a day's wellness metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActivityRequest {
    /// Defaults to the current date when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_consumed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Sparse PATCH of an activity log
///
/// Only fields present in the payload replace stored values; the log date
/// itself is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateActivityLogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_consumed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A day's wellness snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogResponse {
    pub id: Uuid,
    pub log_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_consumed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Calendar-date range filter for activity queries (inclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Reduced workout shape for the dashboard's recent list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentWorkout {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: WorkoutStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    pub date: DateTime<Utc>,
    pub exercise_count: i64,
}

/// One calendar day in the weekly activity series
///
/// Days without a matching log are zero-filled, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub steps: i32,
    pub calories_burned: f64,
    pub sleep_hours: f64,
    pub water_ml: i32,
}

/// Aggregated dashboard view, computed per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_workouts: i64,
    pub total_calories_burned: f64,
    pub avg_steps_per_day: f64,
    pub avg_sleep_hours: f64,
    pub recent_workouts: Vec<RecentWorkout>,
    pub weekly_activity: Vec<DailyActivity>,
}
