use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Status;

pub const SPECIALTIES: [&str; 6] = [
    "Weight training",
    "Yoga/Pilates",
    "CrossFit",
    "Swimming",
    "Boxing",
    "Dance",
];

/// Request payload for registering a trainer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainerRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 100, message = "Specialty is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub specialty: String,

    #[validate(range(min = 0, max = 30, message = "Experience must be between 0 and 30 years"))]
    pub experience_years: i64,

    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1.0 and 5.0"))]
    #[serde(default = "default_rating")]
    pub rating: f64,
}

fn default_rating() -> f64 {
    4.5
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TrainerFilter {
    /// Only return trainers with this status
    pub status: Option<Status>,
}
