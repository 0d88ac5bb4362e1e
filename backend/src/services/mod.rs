//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer.

pub mod activity;
pub mod dashboard;
pub mod exercise;
pub mod user;
pub mod workout;

pub use activity::ActivityLogService;
pub use dashboard::DashboardService;
pub use exercise::ExerciseService;
pub use user::UserService;
pub use workout::WorkoutService;
