//! Database repositories
//!
//! Provides the data access layer for database operations.

pub mod activity;
pub mod exercise;
pub mod user;
pub mod workout;

pub use activity::{ActivityLogRecord, ActivityLogRepository, UpdateActivityLog, UpsertActivityLog};
pub use exercise::{ExerciseRecord, ExerciseRepository, UpsertExercise};
pub use user::{CreateUser, UserRecord, UserRepository};
pub use workout::{
    CompleteWorkout, CreateWorkout, CreateWorkoutExercise, WorkoutExerciseRecord,
    WorkoutExerciseRepository, WorkoutRecord, WorkoutRepository, WorkoutWithCountRecord,
};
