use axum::{
    Router,
    routing::{delete, get},
};
use storage::Database;

use super::handlers::{create_workout, delete_workout, list_workouts};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", delete(delete_workout))
}
