//! Workout and workout-exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

// ============================================================================
// Workouts
// ============================================================================

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Workout row joined with its entry count, for list views
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutWithCountRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub exercise_count: i64,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Completion values written back in one statement
#[derive(Debug, Clone)]
pub struct CompleteWorkout {
    pub completed_at: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: f64,
}

const WORKOUT_WITH_COUNT_COLUMNS: &str = r#"
    id, user_id, name, notes, status, started_at, completed_at,
    duration_minutes, calories_burned, created_at,
    (SELECT COUNT(*) FROM workout_exercises we WHERE we.workout_id = workouts.id) AS exercise_count
"#;

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a workout together with its ordered exercise entries
    ///
    /// Runs in a single transaction: either the workout and every entry are
    /// persisted, or nothing is.
    pub async fn create_with_exercises(
        pool: &PgPool,
        input: CreateWorkout,
        entries: Vec<CreateWorkoutExercise>,
    ) -> Result<(WorkoutRecord, Vec<WorkoutExerciseRecord>)> {
        let mut tx = pool.begin().await?;

        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, name, notes, started_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, notes, status, started_at, completed_at,
                      duration_minutes, calories_burned, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.notes)
        .bind(input.started_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let record = sqlx::query_as::<_, WorkoutExerciseRecord>(
                r#"
                INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, weight_kg,
                                               duration_seconds, distance_meters, calories_burned,
                                               notes, order_index)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING id, workout_id, exercise_id,
                          (SELECT name FROM exercises e WHERE e.id = exercise_id) AS exercise_name,
                          sets, reps, weight_kg, duration_seconds, distance_meters,
                          calories_burned, notes, order_index
                "#,
            )
            .bind(workout.id)
            .bind(entry.exercise_id)
            .bind(entry.sets)
            .bind(entry.reps)
            .bind(entry.weight_kg)
            .bind(entry.duration_seconds)
            .bind(entry.distance_meters)
            .bind(entry.calories_burned)
            .bind(&entry.notes)
            .bind(entry.order_index)
            .fetch_one(&mut *tx)
            .await?;

            saved.push(record);
        }

        tx.commit().await?;

        Ok((workout, saved))
    }

    /// Get workout by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutRecord>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, notes, status, started_at, completed_at,
                   duration_minutes, calories_burned, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get all of a user's workouts, newest first
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutWithCountRecord>> {
        let records = sqlx::query_as::<_, WorkoutWithCountRecord>(&format!(
            r#"
            SELECT {WORKOUT_WITH_COUNT_COLUMNS}
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get workouts created within [start, end], newest first
    pub async fn get_by_date_range(
        pool: &PgPool,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkoutWithCountRecord>> {
        let records = sqlx::query_as::<_, WorkoutWithCountRecord>(&format!(
            r#"
            SELECT {WORKOUT_WITH_COUNT_COLUMNS}
            FROM workouts
            WHERE user_id = $1 AND created_at >= $2 AND created_at <= $3
            ORDER BY created_at DESC
            "#,
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the most recently created workouts, any status
    pub async fn get_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WorkoutWithCountRecord>> {
        let records = sqlx::query_as::<_, WorkoutWithCountRecord>(&format!(
            r#"
            SELECT {WORKOUT_WITH_COUNT_COLUMNS}
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Mark a workout completed, writing the recomputed totals
    pub async fn complete(
        pool: &PgPool,
        id: Uuid,
        values: CompleteWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            UPDATE workouts SET
                status = 'COMPLETED',
                completed_at = $2,
                duration_minutes = $3,
                calories_burned = $4
            WHERE id = $1
            RETURNING id, user_id, name, notes, status, started_at, completed_at,
                      duration_minutes, calories_burned, created_at
            "#,
        )
        .bind(id)
        .bind(values.completed_at)
        .bind(values.duration_minutes)
        .bind(values.calories_burned)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Count a user's COMPLETED workouts
    pub async fn count_completed(pool: &PgPool, user_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM workouts
            WHERE user_id = $1 AND status = 'COMPLETED'
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count.0)
    }

    /// Sum calories over a user's COMPLETED workouts, 0 when none
    pub async fn total_calories_completed(pool: &PgPool, user_id: Uuid) -> Result<f64> {
        let total = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(SUM(calories_burned), 0)::float8
            FROM workouts
            WHERE user_id = $1 AND status = 'COMPLETED'
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total)
    }
}

// ============================================================================
// Workout Exercises
// ============================================================================

/// Workout exercise record, joined with the catalog name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutExerciseRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
    pub duration_seconds: Option<i32>,
    pub distance_meters: Option<f64>,
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    pub order_index: i32,
}

/// Input for one workout entry
#[derive(Debug, Clone)]
pub struct CreateWorkoutExercise {
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
    pub duration_seconds: Option<i32>,
    pub distance_meters: Option<f64>,
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    pub order_index: i32,
}

/// Workout exercise repository
pub struct WorkoutExerciseRepository;

impl WorkoutExerciseRepository {
    /// Get a workout's entries in insertion order
    pub async fn get_by_workout(
        pool: &PgPool,
        workout_id: Uuid,
    ) -> Result<Vec<WorkoutExerciseRecord>> {
        let records = sqlx::query_as::<_, WorkoutExerciseRecord>(
            r#"
            SELECT we.id, we.workout_id, we.exercise_id, e.name AS exercise_name,
                   we.sets, we.reps, we.weight_kg, we.duration_seconds, we.distance_meters,
                   we.calories_burned, we.notes, we.order_index
            FROM workout_exercises we
            JOIN exercises e ON e.id = we.exercise_id
            WHERE we.workout_id = $1
            ORDER BY we.order_index ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
