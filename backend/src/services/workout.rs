//! Workout engine
//!
//! Builds workouts from user-selected exercise lists, derives per-entry
//! calorie burn from the catalog rate, and finalizes duration and total
//! calories on completion.

use crate::error::ApiError;
use crate::repositories::{
    CompleteWorkout, CreateWorkout, CreateWorkoutExercise, ExerciseRepository, UserRepository,
    WorkoutExerciseRecord, WorkoutExerciseRepository, WorkoutRecord, WorkoutRepository,
    WorkoutWithCountRecord,
};
use chrono::{DateTime, Utc};
use fittrack_shared::types::{
    CreateWorkoutRequest, WorkoutEntryResponse, WorkoutResponse, WorkoutSummaryResponse,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Derive an entry's calorie burn from the catalog rate and duration
    ///
    /// Returns None unless both the rate and the duration are present.
    /// The raw product is stored; display rounding happens at the response
    /// boundary.
    pub fn entry_calories(
        calories_per_minute: Option<f64>,
        duration_seconds: Option<i32>,
    ) -> Option<f64> {
        match (calories_per_minute, duration_seconds) {
            (Some(rate), Some(secs)) => Some(rate * (f64::from(secs) / 60.0)),
            _ => None,
        }
    }

    /// Whole minutes elapsed between start and completion, truncating
    pub fn elapsed_minutes(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> i32 {
        (completed_at - started_at).num_minutes() as i32
    }

    /// Total burn across entries, treating missing values as 0
    pub fn total_calories(entries: &[WorkoutExerciseRecord]) -> f64 {
        entries
            .iter()
            .map(|e| e.calories_burned.unwrap_or(0.0))
            .sum()
    }

    /// Create a workout in the IN_PROGRESS state
    ///
    /// Every exercise reference is resolved before anything is written; an
    /// unknown id fails the whole request with NotFound and no partial
    /// workout is persisted.
    pub async fn create_workout(
        pool: &PgPool,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let mut entries = Vec::with_capacity(request.exercises.len());
        for (index, entry) in request.exercises.iter().enumerate() {
            let exercise = ExerciseRepository::get_by_id(pool, entry.exercise_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("Exercise {} not found", entry.exercise_id))
                })?;

            let calories_burned =
                Self::entry_calories(exercise.calories_per_minute, entry.duration_seconds);

            entries.push(CreateWorkoutExercise {
                exercise_id: exercise.id,
                sets: entry.sets,
                reps: entry.reps,
                weight_kg: entry.weight_kg,
                duration_seconds: entry.duration_seconds,
                distance_meters: entry.distance_meters,
                calories_burned,
                notes: entry.notes.clone(),
                order_index: index as i32,
            });
        }

        let input = CreateWorkout {
            user_id,
            name: request.name,
            notes: request.notes,
            started_at: Utc::now(),
        };

        let (workout, saved_entries) =
            WorkoutRepository::create_with_exercises(pool, input, entries)
                .await
                .map_err(ApiError::Internal)?;

        Self::to_response(workout, saved_entries)
    }

    /// Complete a workout, computing duration and total calories
    ///
    /// Re-completing an already-completed workout is accepted: the totals
    /// are recomputed and completed_at is re-stamped.
    pub async fn complete_workout(pool: &PgPool, id: Uuid) -> Result<WorkoutResponse, ApiError> {
        let workout = WorkoutRepository::get_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        let entries = WorkoutExerciseRepository::get_by_workout(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        let completed_at = Utc::now();
        let duration_minutes = workout
            .started_at
            .map(|started| Self::elapsed_minutes(started, completed_at));
        let calories_burned = Self::total_calories(&entries);

        let updated = WorkoutRepository::complete(
            pool,
            id,
            CompleteWorkout {
                completed_at,
                duration_minutes,
                calories_burned,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Self::to_response(updated, entries)
    }

    /// Fetch a single workout with its entries
    pub async fn get_workout(pool: &PgPool, id: Uuid) -> Result<WorkoutResponse, ApiError> {
        let workout = WorkoutRepository::get_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        let entries = WorkoutExerciseRepository::get_by_workout(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        Self::to_response(workout, entries)
    }

    /// All of a user's workouts, newest first
    pub async fn get_user_workouts(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutSummaryResponse>, ApiError> {
        let records = WorkoutRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_summary).collect()
    }

    /// Workouts created within [start, end], newest first
    pub async fn get_workouts_by_date_range(
        pool: &PgPool,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkoutSummaryResponse>, ApiError> {
        let records = WorkoutRepository::get_by_date_range(pool, user_id, start, end)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_summary).collect()
    }

    /// Round a derived value to 1 decimal for display
    pub fn round_display(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    fn to_response(
        workout: WorkoutRecord,
        entries: Vec<WorkoutExerciseRecord>,
    ) -> Result<WorkoutResponse, ApiError> {
        let status = workout
            .status
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))?;

        let exercises: Vec<WorkoutEntryResponse> = entries
            .into_iter()
            .map(|e| WorkoutEntryResponse {
                id: e.id,
                exercise_id: e.exercise_id,
                exercise_name: e.exercise_name,
                sets: e.sets,
                reps: e.reps,
                weight_kg: e.weight_kg,
                duration_seconds: e.duration_seconds,
                distance_meters: e.distance_meters,
                calories_burned: e.calories_burned.map(Self::round_display),
                notes: e.notes,
                order_index: e.order_index,
            })
            .collect();

        Ok(WorkoutResponse {
            id: workout.id,
            name: workout.name,
            notes: workout.notes,
            status,
            started_at: workout.started_at,
            completed_at: workout.completed_at,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            exercise_count: exercises.len(),
            exercises,
            created_at: workout.created_at,
        })
    }

    fn to_summary(record: WorkoutWithCountRecord) -> Result<WorkoutSummaryResponse, ApiError> {
        let status = record
            .status
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))?;

        Ok(WorkoutSummaryResponse {
            id: record.id,
            name: record.name,
            notes: record.notes,
            status,
            started_at: record.started_at,
            completed_at: record.completed_at,
            duration_minutes: record.duration_minutes,
            calories_burned: record.calories_burned,
            exercise_count: record.exercise_count,
            created_at: record.created_at,
        })
    }
}
