use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Request payload for scheduling a class
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClassRequest {
    #[validate(
        length(min = 1, max = 255, message = "Class name is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub class_name: String,

    pub trainer_id: i64,

    pub date: NaiveDate,

    /// Start time, `HH:MM` (24h)
    #[validate(custom(function = "validate_start_time"))]
    pub time: String,

    #[validate(range(min = 30, max = 180))]
    pub duration: i64,

    #[validate(range(min = 1, max = 30))]
    pub max_capacity: i64,
}

impl CreateClassRequest {
    /// Start time normalised to `HH:MM`.
    pub fn normalized_time(&self) -> Option<String> {
        parse_start_time(&self.time).map(|t| t.format("%H:%M").to_string())
    }
}

fn parse_start_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    if parse_start_time(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_time");
        error.message = Some("Time must be HH:MM".into());
        Err(error)
    }
}

/// Class joined with its trainer and its live seat count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassListing {
    pub id: i64,
    pub class_name: String,
    pub trainer_id: i64,
    pub trainer_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: i64,
    pub max_capacity: i64,
    /// Confirmed bookings
    pub current_bookings: i64,
    pub available_spots: i64,
}

impl ClassListing {
    pub fn is_full(&self) -> bool {
        self.current_bookings >= self.max_capacity
    }
}
