use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_trainer, deactivate_trainer, get_trainer, list_trainers};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_trainers).post(create_trainer))
        .route("/:id", get(get_trainer).delete(deactivate_trainer))
}
