use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    calories, heatmap, memberships, monthly, popular_exercises, time_slots, trainer_load,
    trainer_ratings,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/memberships", get(memberships))
        .route("/trainer-ratings", get(trainer_ratings))
        .route("/monthly", get(monthly))
        .route("/popular-exercises", get(popular_exercises))
        .route("/calories", get(calories))
        .route("/trainer-load", get(trainer_load))
        .route("/time-slots", get(time_slots))
        .route("/heatmap", get(heatmap))
}
