use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Status;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub experience_years: i64,
    pub rating: f64,
    pub status: Status,
}
