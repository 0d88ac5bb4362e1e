//! Domain enums for the FitTrack application
//!
//! All enums serialize as SCREAMING_SNAKE_CASE strings, which is also the
//! representation stored in the database TEXT columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known enum variant
#[derive(Debug, Clone, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Normalize a path or query value before variant matching
///
/// Accepts "full-body", "full_body", and "FULL_BODY" alike.
fn normalize(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}

/// User account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(UnknownVariant::new("role", s)),
        }
    }
}

/// Muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Arms => "ARMS",
            MuscleGroup::Legs => "LEGS",
            MuscleGroup::Core => "CORE",
            MuscleGroup::FullBody => "FULL_BODY",
            MuscleGroup::Cardio => "CARDIO",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "CHEST" => Ok(MuscleGroup::Chest),
            "BACK" => Ok(MuscleGroup::Back),
            "SHOULDERS" => Ok(MuscleGroup::Shoulders),
            "ARMS" => Ok(MuscleGroup::Arms),
            "LEGS" => Ok(MuscleGroup::Legs),
            "CORE" => Ok(MuscleGroup::Core),
            "FULL_BODY" => Ok(MuscleGroup::FullBody),
            "CARDIO" => Ok(MuscleGroup::Cardio),
            _ => Err(UnknownVariant::new("muscle group", s)),
        }
    }
}

/// Training category of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Balance,
    Hiit,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "STRENGTH",
            ExerciseCategory::Cardio => "CARDIO",
            ExerciseCategory::Flexibility => "FLEXIBILITY",
            ExerciseCategory::Balance => "BALANCE",
            ExerciseCategory::Hiit => "HIIT",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "STRENGTH" => Ok(ExerciseCategory::Strength),
            "CARDIO" => Ok(ExerciseCategory::Cardio),
            "FLEXIBILITY" => Ok(ExerciseCategory::Flexibility),
            "BALANCE" => Ok(ExerciseCategory::Balance),
            "HIIT" => Ok(ExerciseCategory::Hiit),
            _ => Err(UnknownVariant::new("category", s)),
        }
    }
}

/// Workout lifecycle state
///
/// Every workout starts IN_PROGRESS. COMPLETED is reached through the
/// complete operation; CANCELLED exists in the model but has no exposed
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::InProgress => "IN_PROGRESS",
            WorkoutStatus::Completed => "COMPLETED",
            WorkoutStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "IN_PROGRESS" => Ok(WorkoutStatus::InProgress),
            "COMPLETED" => Ok(WorkoutStatus::Completed),
            "CANCELLED" => Ok(WorkoutStatus::Cancelled),
            _ => Err(UnknownVariant::new("workout status", s)),
        }
    }
}
