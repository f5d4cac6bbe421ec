use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::WorkoutRecord;

pub const EXERCISES: [&str; 7] = [
    "Bench press",
    "Squat",
    "Deadlift",
    "Pull-up",
    "Push-up",
    "Treadmill",
    "Cycling",
];

/// Request payload for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    pub member_id: i64,

    #[validate(
        length(min = 1, max = 100, message = "Exercise is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub exercise_name: String,

    #[validate(range(min = 1, max = 10))]
    pub sets: i64,

    #[validate(range(min = 1, max = 50))]
    pub reps: i64,

    #[validate(range(min = 0.0))]
    pub weight: f64,

    #[validate(range(min = 1))]
    pub duration: i64,

    #[validate(range(min = 0))]
    pub calories_burned: i64,

    pub date: NaiveDate,
}

/// Workout record joined with its member's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutRecordDetail {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub exercise_name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub duration: i64,
    pub calories_burned: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailyCalories {
    pub date: NaiveDate,
    pub calories: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExerciseCount {
    pub exercise_name: String,
    pub count: i64,
}

/// Everything the workout view charts for one member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberActivity {
    pub workouts: Vec<WorkoutRecord>,
    pub daily_calories: Vec<DailyCalories>,
    pub exercise_frequency: Vec<ExerciseCount>,
}

/// Per-exercise aggregate over a member's recent window
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ExerciseStat {
    pub exercise_name: String,
    pub avg_weight: Option<f64>,
    pub frequency: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutRecommendation {
    /// Fixed starter suggestion for members without recent history
    Beginner {
        exercise_name: String,
        prescription: String,
    },
    /// Progressive overload on an exercise the member already does
    Progression {
        exercise_name: String,
        weight_kg: i64,
        sets: u32,
        reps_min: u32,
        reps_max: u32,
    },
}

impl fmt::Display for WorkoutRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner {
                exercise_name,
                prescription,
            } => write!(f, "Beginner: {exercise_name} {prescription}"),
            Self::Progression {
                exercise_name,
                weight_kg,
                sets,
                reps_min,
                reps_max,
            } => write!(
                f,
                "{exercise_name}: {weight_kg}kg, {sets} sets of {reps_min}-{reps_max} reps"
            ),
        }
    }
}
