//! Activity log service
//!
//! Daily wellness metrics, one row per user per calendar day. Logging is an
//! upsert keyed by (user, date); updates are sparse field overlays.

use crate::error::ApiError;
use crate::repositories::{
    ActivityLogRecord, ActivityLogRepository, UpdateActivityLog, UpsertActivityLog, UserRepository,
};
use chrono::{NaiveDate, Utc};
use fittrack_shared::types::{ActivityLogResponse, LogActivityRequest, UpdateActivityLogRequest};
use fittrack_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Activity log service
pub struct ActivityLogService;

impl ActivityLogService {
    /// Log a day's metrics, defaulting the date to today
    ///
    /// When a log already exists for that date, the provided fields overlay
    /// it; there is never more than one log per user per day.
    pub async fn log_activity(
        pool: &PgPool,
        user_id: Uuid,
        request: LogActivityRequest,
    ) -> Result<ActivityLogResponse, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Self::validate_metrics(
            request.steps,
            request.water_ml,
            request.calories_consumed,
            request.sleep_hours,
        )?;

        let log_date = request
            .log_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let record = ActivityLogRepository::upsert_by_date(
            pool,
            UpsertActivityLog {
                user_id,
                log_date,
                steps: request.steps,
                calories_consumed: request.calories_consumed,
                calories_burned: request.calories_burned,
                water_ml: request.water_ml,
                sleep_hours: request.sleep_hours,
                weight_kg: request.weight_kg,
                mood: request.mood,
                notes: request.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// All of a user's logs, newest date first
    pub async fn get_user_logs(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ActivityLogResponse>, ApiError> {
        let records = ActivityLogRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// The log for an exact date, when one exists
    ///
    /// Absence is a plain None; the route layer maps it to a 404.
    pub async fn get_log_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<ActivityLogResponse>, ApiError> {
        let record = ActivityLogRepository::get_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record.map(Self::to_response))
    }

    /// Logs within [start, end] inclusive, oldest first
    pub async fn get_logs_by_date_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ActivityLogResponse>, ApiError> {
        let records = ActivityLogRepository::get_by_date_range(pool, user_id, start, end)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Sparse update: only provided fields replace stored values
    pub async fn update_log(
        pool: &PgPool,
        log_id: Uuid,
        request: UpdateActivityLogRequest,
    ) -> Result<ActivityLogResponse, ApiError> {
        Self::validate_metrics(
            request.steps,
            request.water_ml,
            request.calories_consumed,
            request.sleep_hours,
        )?;

        let record = ActivityLogRepository::update(
            pool,
            log_id,
            UpdateActivityLog {
                steps: request.steps,
                calories_consumed: request.calories_consumed,
                calories_burned: request.calories_burned,
                water_ml: request.water_ml,
                sleep_hours: request.sleep_hours,
                weight_kg: request.weight_kg,
                mood: request.mood,
                notes: request.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Activity log not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    fn validate_metrics(
        steps: Option<i32>,
        water_ml: Option<i32>,
        calories_consumed: Option<i32>,
        sleep_hours: Option<f64>,
    ) -> Result<(), ApiError> {
        if let Some(steps) = steps {
            validation::validate_non_negative(steps, "steps").map_err(ApiError::Validation)?;
        }
        if let Some(water) = water_ml {
            validation::validate_non_negative(water, "water_ml").map_err(ApiError::Validation)?;
        }
        if let Some(consumed) = calories_consumed {
            validation::validate_non_negative(consumed, "calories_consumed")
                .map_err(ApiError::Validation)?;
        }
        if let Some(hours) = sleep_hours {
            validation::validate_sleep_hours(hours).map_err(ApiError::Validation)?;
        }
        Ok(())
    }

    fn to_response(record: ActivityLogRecord) -> ActivityLogResponse {
        ActivityLogResponse {
            id: record.id,
            log_date: record.log_date,
            steps: record.steps,
            calories_consumed: record.calories_consumed,
            calories_burned: record.calories_burned,
            water_ml: record.water_ml,
            sleep_hours: record.sleep_hours,
            weight_kg: record.weight_kg,
            mood: record.mood,
            notes: record.notes,
            created_at: record.created_at,
        }
    }
}
