use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    book_class, cancel_booking, create_class, delete_class, get_booking, get_class,
    list_class_bookings, list_classes, list_upcoming,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/upcoming", get(list_upcoming))
        .route("/:id", get(get_class).delete(delete_class))
        .route("/:id/bookings", get(list_class_bookings).post(book_class))
}

pub fn booking_routes() -> Router<Database> {
    Router::new().route("/:id", get(get_booking).delete(cancel_booking))
}
