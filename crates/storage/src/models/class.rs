use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A scheduled class occurrence.
///
/// Seats taken are not stored here; they are counted from confirmed bookings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GymClass {
    pub id: i64,
    pub class_name: String,
    pub trainer_id: i64,
    pub date: NaiveDate,
    /// Start time, `HH:MM`
    pub time: String,
    /// Minutes
    pub duration: i64,
    pub max_capacity: i64,
}
