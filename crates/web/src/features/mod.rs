use axum::Router;
use storage::Database;

pub mod analytics;
pub mod classes;
pub mod dashboard;
pub mod members;
pub mod trainers;
pub mod workouts;

/// JSON API, nested under `/api`
pub fn routes() -> Router<Database> {
    Router::new()
        .nest("/members", members::routes::routes())
        .nest("/trainers", trainers::routes::routes())
        .nest("/workouts", workouts::routes::routes())
        .nest("/classes", classes::routes::routes())
        .nest("/bookings", classes::routes::booking_routes())
        .nest("/analytics", analytics::routes::routes())
        .nest("/dashboard", dashboard::routes::routes())
}
