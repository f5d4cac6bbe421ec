use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::BookingStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookClassRequest {
    pub member_id: i64,
}

/// Booking joined with the booked member's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingDetail {
    pub id: i64,
    pub class_id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
}
