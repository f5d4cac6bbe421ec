use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_member, deactivate_member, get_member, list_expiring, list_members, member_activity,
    member_recommendations, member_workouts,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route("/expiring", get(list_expiring))
        .route("/:id", get(get_member).delete(deactivate_member))
        .route("/:id/workouts", get(member_workouts))
        .route("/:id/activity", get(member_activity))
        .route("/:id/recommendations", get(member_recommendations))
}
