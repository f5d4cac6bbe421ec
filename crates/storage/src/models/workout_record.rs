use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutRecord {
    pub id: i64,
    pub member_id: i64,
    pub exercise_name: String,
    pub sets: i64,
    pub reps: i64,
    /// Kilograms
    pub weight: f64,
    /// Minutes
    pub duration: i64,
    pub calories_burned: i64,
    pub date: NaiveDate,
}
