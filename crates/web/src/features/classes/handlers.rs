use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        booking::{BookClassRequest, BookingDetail},
        class::{ClassListing, CreateClassRequest},
    },
    models::{Booking, GymClass},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes with seat counts, latest first", body = Vec<ClassListing>)
    ),
    tag = "classes"
)]
pub async fn list_classes(State(db): State<Database>) -> Result<Response, WebError> {
    let classes = services::list_classes(db.pool()).await?;

    Ok(Json(classes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/upcoming",
    responses(
        (status = 200, description = "Classes from today on, in schedule order", body = Vec<ClassListing>)
    ),
    tag = "classes"
)]
pub async fn list_upcoming(State(db): State<Database>) -> Result<Response, WebError> {
    let classes = services::upcoming_classes(db.pool(), crate::today()).await?;

    Ok(Json(classes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    responses(
        (status = 200, description = "Class found", body = ClassListing),
        (status = 404, description = "Class not found")
    ),
    tag = "classes"
)]
pub async fn get_class(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let class = services::get_class(db.pool(), id).await?;

    Ok(Json(class).into_response())
}

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class scheduled", body = GymClass),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Trainer does not exist")
    ),
    tag = "classes"
)]
pub async fn create_class(
    State(db): State<Database>,
    Json(req): Json<CreateClassRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let class = services::schedule_class(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(class)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    responses(
        (status = 204, description = "Class and its bookings deleted"),
        (status = 404, description = "Class not found")
    ),
    tag = "classes"
)]
pub async fn delete_class(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_class(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}/bookings",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    responses(
        (status = 200, description = "Bookings of the class, confirmed and cancelled", body = Vec<BookingDetail>),
        (status = 404, description = "Class not found")
    ),
    tag = "bookings"
)]
pub async fn list_class_bookings(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let bookings = services::class_bookings(db.pool(), id).await?;

    Ok(Json(bookings).into_response())
}

#[utoipa::path(
    post,
    path = "/api/classes/{id}/bookings",
    params(
        ("id" = i64, Path, description = "Class id")
    ),
    request_body = BookClassRequest,
    responses(
        (status = 201, description = "Seat booked", body = Booking),
        (status = 404, description = "Class or member not found"),
        (status = 409, description = "Class is full or member is inactive")
    ),
    tag = "bookings"
)]
pub async fn book_class(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<BookClassRequest>,
) -> Result<Response, WebError> {
    let booking = services::book_class(db.pool(), id, req.member_id, crate::today()).await?;

    Ok((StatusCode::CREATED, Json(booking)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(
        ("id" = i64, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking found", body = Booking),
        (status = 404, description = "Booking not found")
    ),
    tag = "bookings"
)]
pub async fn get_booking(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let booking = services::get_booking(db.pool(), id).await?;

    Ok(Json(booking).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(
        ("id" = i64, Path, description = "Booking id")
    ),
    responses(
        (status = 204, description = "Booking cancelled, seat released"),
        (status = 404, description = "Booking not found or already cancelled")
    ),
    tag = "bookings"
)]
pub async fn cancel_booking(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::cancel_booking(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
