//! Exercise catalog service
//!
//! CRUD over the read-mostly catalog. Reads are open to any authenticated
//! user; writes are gated to admins at the route layer.

use crate::error::ApiError;
use crate::repositories::{ExerciseRecord, ExerciseRepository, UpsertExercise};
use fittrack_shared::models::{ExerciseCategory, MuscleGroup};
use fittrack_shared::types::{CreateExerciseRequest, ExerciseResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise catalog service
pub struct ExerciseService;

impl ExerciseService {
    /// List the whole catalog
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ExerciseResponse>, ApiError> {
        let records = ExerciseRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_response).collect()
    }

    /// List exercises for one muscle group
    pub async fn list_by_muscle_group(
        pool: &PgPool,
        muscle_group: MuscleGroup,
    ) -> Result<Vec<ExerciseResponse>, ApiError> {
        let records = ExerciseRepository::get_by_muscle_group(pool, muscle_group.as_str())
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_response).collect()
    }

    /// List exercises for one category
    pub async fn list_by_category(
        pool: &PgPool,
        category: ExerciseCategory,
    ) -> Result<Vec<ExerciseResponse>, ApiError> {
        let records = ExerciseRepository::get_by_category(pool, category.as_str())
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_response).collect()
    }

    /// Case-insensitive substring search on the exercise name
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<ExerciseResponse>, ApiError> {
        let records = ExerciseRepository::search(pool, query)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_response).collect()
    }

    /// Fetch one exercise
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<ExerciseResponse, ApiError> {
        let record = ExerciseRepository::get_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Self::to_response(record)
    }

    /// Create a catalog entry (admin)
    pub async fn create(
        pool: &PgPool,
        request: CreateExerciseRequest,
    ) -> Result<ExerciseResponse, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::Validation(
                "Exercise name cannot be empty".to_string(),
            ));
        }

        let record = ExerciseRepository::create(pool, Self::to_upsert(request))
            .await
            .map_err(ApiError::Internal)?;

        Self::to_response(record)
    }

    /// Replace every mutable field of a catalog entry (admin)
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        request: CreateExerciseRequest,
    ) -> Result<ExerciseResponse, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::Validation(
                "Exercise name cannot be empty".to_string(),
            ));
        }

        let record = ExerciseRepository::update(pool, id, Self::to_upsert(request))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Self::to_response(record)
    }

    /// Delete a catalog entry (admin)
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = ExerciseRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Exercise not found".to_string()));
        }

        Ok(())
    }

    fn to_upsert(request: CreateExerciseRequest) -> UpsertExercise {
        UpsertExercise {
            name: request.name,
            description: request.description,
            muscle_group: request.muscle_group.as_str().to_string(),
            category: request.category.as_str().to_string(),
            calories_per_minute: request.calories_per_minute,
            difficulty: request.difficulty,
        }
    }

    fn to_response(record: ExerciseRecord) -> Result<ExerciseResponse, ApiError> {
        let muscle_group = record
            .muscle_group
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))?;
        let category = record
            .category
            .parse()
            .map_err(|e: fittrack_shared::models::UnknownVariant| ApiError::Internal(e.into()))?;

        Ok(ExerciseResponse {
            id: record.id,
            name: record.name,
            description: record.description,
            muscle_group,
            category,
            calories_per_minute: record.calories_per_minute,
            difficulty: record.difficulty,
        })
    }
}
