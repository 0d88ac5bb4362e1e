//! Exercise catalog repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: String,
    pub category: String,
    pub calories_per_minute: Option<f64>,
    pub difficulty: Option<String>,
}

/// Input for creating or fully updating an exercise
#[derive(Debug, Clone)]
pub struct UpsertExercise {
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: String,
    pub category: String,
    pub calories_per_minute: Option<f64>,
    pub difficulty: Option<String>,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new catalog exercise
    pub async fn create(pool: &PgPool, input: UpsertExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (name, description, muscle_group, category, calories_per_minute, difficulty)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, muscle_group, category, calories_per_minute, difficulty
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.muscle_group)
        .bind(&input.category)
        .bind(input.calories_per_minute)
        .bind(&input.difficulty)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all exercises
    pub async fn get_all(pool: &PgPool) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, muscle_group, category, calories_per_minute, difficulty
            FROM exercises
            ORDER BY category, name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get exercises by muscle group
    pub async fn get_by_muscle_group(
        pool: &PgPool,
        muscle_group: &str,
    ) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, muscle_group, category, calories_per_minute, difficulty
            FROM exercises
            WHERE muscle_group = $1
            ORDER BY name
            "#,
        )
        .bind(muscle_group)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get exercises by category
    pub async fn get_by_category(pool: &PgPool, category: &str) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, muscle_group, category, calories_per_minute, difficulty
            FROM exercises
            WHERE category = $1
            ORDER BY name
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Search exercises by name, case-insensitively
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, muscle_group, category, calories_per_minute, difficulty
            FROM exercises
            WHERE LOWER(name) LIKE LOWER($1)
            ORDER BY name
            "#,
        )
        .bind(format!("%{}%", query))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get exercise by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ExerciseRecord>> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, description, muscle_group, category, calories_per_minute, difficulty
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Replace every mutable field of an exercise
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: UpsertExercise,
    ) -> Result<Option<ExerciseRecord>> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            UPDATE exercises SET
                name = $2,
                description = $3,
                muscle_group = $4,
                category = $5,
                calories_per_minute = $6,
                difficulty = $7
            WHERE id = $1
            RETURNING id, name, description, muscle_group, category, calories_per_minute, difficulty
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.muscle_group)
        .bind(&input.category)
        .bind(input.calories_per_minute)
        .bind(&input.difficulty)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an exercise
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM exercises WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
