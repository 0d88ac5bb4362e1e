//! Activity log repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Activity log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub steps: Option<i32>,
    pub calories_consumed: Option<i32>,
    pub calories_burned: Option<f64>,
    pub water_ml: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub weight_kg: Option<f64>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for upserting a day's log
#[derive(Debug, Clone)]
pub struct UpsertActivityLog {
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub steps: Option<i32>,
    pub calories_consumed: Option<i32>,
    pub calories_burned: Option<f64>,
    pub water_ml: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub weight_kg: Option<f64>,
    pub mood: Option<String>,
    pub notes: Option<String>,
}

/// Sparse field overlay for updating a log
///
/// Only provided (Some) fields replace stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateActivityLog {
    pub steps: Option<i32>,
    pub calories_consumed: Option<i32>,
    pub calories_burned: Option<f64>,
    pub water_ml: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub weight_kg: Option<f64>,
    pub mood: Option<String>,
    pub notes: Option<String>,
}

const ACTIVITY_LOG_COLUMNS: &str = r#"
    id, user_id, log_date, steps, calories_consumed, calories_burned,
    water_ml, sleep_hours, weight_kg, mood, notes, created_at
"#;

/// Activity log repository
pub struct ActivityLogRepository;

impl ActivityLogRepository {
    /// Insert a day's log, overlaying an existing row for that date
    ///
    /// The (user_id, log_date) unique constraint keeps at most one log per
    /// user per calendar day; on conflict, provided fields overlay the
    /// stored row and absent fields are left untouched.
    pub async fn upsert_by_date(
        pool: &PgPool,
        input: UpsertActivityLog,
    ) -> Result<ActivityLogRecord> {
        let record = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            INSERT INTO activity_logs (user_id, log_date, steps, calories_consumed,
                                       calories_burned, water_ml, sleep_hours, weight_kg,
                                       mood, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id, log_date) DO UPDATE SET
                steps = COALESCE(EXCLUDED.steps, activity_logs.steps),
                calories_consumed = COALESCE(EXCLUDED.calories_consumed, activity_logs.calories_consumed),
                calories_burned = COALESCE(EXCLUDED.calories_burned, activity_logs.calories_burned),
                water_ml = COALESCE(EXCLUDED.water_ml, activity_logs.water_ml),
                sleep_hours = COALESCE(EXCLUDED.sleep_hours, activity_logs.sleep_hours),
                weight_kg = COALESCE(EXCLUDED.weight_kg, activity_logs.weight_kg),
                mood = COALESCE(EXCLUDED.mood, activity_logs.mood),
                notes = COALESCE(EXCLUDED.notes, activity_logs.notes)
            RETURNING {ACTIVITY_LOG_COLUMNS}
            "#,
        ))
        .bind(input.user_id)
        .bind(input.log_date)
        .bind(input.steps)
        .bind(input.calories_consumed)
        .bind(input.calories_burned)
        .bind(input.water_ml)
        .bind(input.sleep_hours)
        .bind(input.weight_kg)
        .bind(&input.mood)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find a log by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ActivityLogRecord>> {
        let record = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            SELECT {ACTIVITY_LOG_COLUMNS}
            FROM activity_logs
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get all of a user's logs, newest date first
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ActivityLogRecord>> {
        let records = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            SELECT {ACTIVITY_LOG_COLUMNS}
            FROM activity_logs
            WHERE user_id = $1
            ORDER BY log_date DESC
            "#,
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the single log for an exact date
    pub async fn get_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ActivityLogRecord>> {
        let record = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            SELECT {ACTIVITY_LOG_COLUMNS}
            FROM activity_logs
            WHERE user_id = $1 AND log_date = $2
            "#,
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get logs within [start, end] inclusive, oldest date first
    pub async fn get_by_date_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ActivityLogRecord>> {
        let records = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            SELECT {ACTIVITY_LOG_COLUMNS}
            FROM activity_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            ORDER BY log_date ASC
            "#,
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Overlay provided fields onto a stored log
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateActivityLog,
    ) -> Result<Option<ActivityLogRecord>> {
        let record = sqlx::query_as::<_, ActivityLogRecord>(&format!(
            r#"
            UPDATE activity_logs SET
                steps = COALESCE($2, steps),
                calories_consumed = COALESCE($3, calories_consumed),
                calories_burned = COALESCE($4, calories_burned),
                water_ml = COALESCE($5, water_ml),
                sleep_hours = COALESCE($6, sleep_hours),
                weight_kg = COALESCE($7, weight_kg),
                mood = COALESCE($8, mood),
                notes = COALESCE($9, notes)
            WHERE id = $1
            RETURNING {ACTIVITY_LOG_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(updates.steps)
        .bind(updates.calories_consumed)
        .bind(updates.calories_burned)
        .bind(updates.water_ml)
        .bind(updates.sleep_hours)
        .bind(updates.weight_kg)
        .bind(updates.mood)
        .bind(updates.notes)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Mean steps across all of a user's logs, 0 when none
    pub async fn avg_steps(pool: &PgPool, user_id: Uuid) -> Result<f64> {
        let avg = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(AVG(steps), 0)::float8
            FROM activity_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(avg)
    }

    /// Mean sleep hours across all of a user's logs, 0 when none
    pub async fn avg_sleep_hours(pool: &PgPool, user_id: Uuid) -> Result<f64> {
        let avg = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(AVG(sleep_hours), 0)::float8
            FROM activity_logs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(avg)
    }
}
