use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::member::ExpiringMember;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub active_members: i64,
    pub active_trainers: i64,
    pub workouts_today: i64,
    pub upcoming_classes: i64,
    pub expiring_members: Vec<ExpiringMember>,
}
