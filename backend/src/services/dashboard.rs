//! Dashboard aggregator
//!
//! A read-only view over the workout engine and the activity log store,
//! computed synchronously per request and never cached.

use crate::error::ApiError;
use crate::repositories::{
    ActivityLogRecord, ActivityLogRepository, WorkoutRepository, WorkoutWithCountRecord,
};
use chrono::{Duration, NaiveDate, Utc};
use fittrack_shared::types::{DailyActivity, DashboardResponse, RecentWorkout};
use sqlx::PgPool;
use uuid::Uuid;

/// Number of workouts shown in the recent list
const RECENT_WORKOUT_LIMIT: i64 = 5;

/// Number of days in the weekly activity series
const WEEKLY_ACTIVITY_DAYS: i64 = 7;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Build the dashboard for a user
    pub async fn get_dashboard(pool: &PgPool, user_id: Uuid) -> Result<DashboardResponse, ApiError> {
        let total_workouts = WorkoutRepository::count_completed(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let total_calories_burned = WorkoutRepository::total_calories_completed(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let avg_steps_per_day = ActivityLogRepository::avg_steps(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let avg_sleep_hours = ActivityLogRepository::avg_sleep_hours(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let recent = WorkoutRepository::get_recent(pool, user_id, RECENT_WORKOUT_LIMIT)
            .await
            .map_err(ApiError::Internal)?;
        let recent_workouts = recent
            .into_iter()
            .map(Self::to_recent)
            .collect::<Result<Vec<_>, _>>()?;

        let today = Utc::now().date_naive();
        let week_start = today - Duration::days(WEEKLY_ACTIVITY_DAYS - 1);
        let week_logs = ActivityLogRepository::get_by_date_range(pool, user_id, week_start, today)
            .await
            .map_err(ApiError::Internal)?;
        let weekly_activity = Self::build_weekly_activity(today, &week_logs);

        Ok(DashboardResponse {
            total_workouts,
            total_calories_burned,
            avg_steps_per_day,
            avg_sleep_hours,
            recent_workouts,
            weekly_activity,
        })
    }

    /// Build the 7-day series ending today, ascending
    ///
    /// Every date in the window appears exactly once; dates without a
    /// matching log are zero-filled rather than dropped.
    pub fn build_weekly_activity(
        today: NaiveDate,
        logs: &[ActivityLogRecord],
    ) -> Vec<DailyActivity> {
        let week_start = today - Duration::days(WEEKLY_ACTIVITY_DAYS - 1);

        (0..WEEKLY_ACTIVITY_DAYS)
            .map(|offset| {
                let date = week_start + Duration::days(offset);
                let log = logs.iter().find(|l| l.log_date == date);

                DailyActivity {
                    date,
                    steps: log.and_then(|l| l.steps).unwrap_or(0),
                    calories_burned: log.and_then(|l| l.calories_burned).unwrap_or(0.0),
                    sleep_hours: log.and_then(|l| l.sleep_hours).unwrap_or(0.0),
                    water_ml: log.and_then(|l| l.water_ml).unwrap_or(0),
                }
            })
            .collect()
    }

    fn to_recent(record: WorkoutWithCountRecord) -> Result<RecentWorkout, ApiError> {
        let status = record
            .status
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))?;

        Ok(RecentWorkout {
            id: record.id,
            name: record.name,
            status,
            duration_minutes: record.duration_minutes,
            calories_burned: record.calories_burned,
            date: record.created_at,
            exercise_count: record.exercise_count,
        })
    }
}
