use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::analytics::{
        ActivityHeatmap, ExerciseCalories, MembershipCount, MonthlyActivity, PopularExercise,
        TimeSlotLoad, TrainerLoad, TrainerRating,
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/analytics/memberships",
    responses(
        (status = 200, description = "Active members per plan tier", body = Vec<MembershipCount>)
    ),
    tag = "analytics"
)]
pub async fn memberships(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::membership_distribution(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/trainer-ratings",
    responses(
        (status = 200, description = "Active trainers by rating", body = Vec<TrainerRating>)
    ),
    tag = "analytics"
)]
pub async fn trainer_ratings(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::trainer_ratings(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/monthly",
    responses(
        (status = 200, description = "Workout count and calories per month", body = Vec<MonthlyActivity>)
    ),
    tag = "analytics"
)]
pub async fn monthly(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::monthly_activity(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/popular-exercises",
    responses(
        (status = 200, description = "Ten most logged exercises", body = Vec<PopularExercise>)
    ),
    tag = "analytics"
)]
pub async fn popular_exercises(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::popular_exercises(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/calories",
    responses(
        (status = 200, description = "Average calories per exercise, top eight", body = Vec<ExerciseCalories>)
    ),
    tag = "analytics"
)]
pub async fn calories(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::calories_by_exercise(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/trainer-load",
    responses(
        (status = 200, description = "Classes and average bookings per trainer", body = Vec<TrainerLoad>)
    ),
    tag = "analytics"
)]
pub async fn trainer_load(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::trainer_load(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/time-slots",
    responses(
        (status = 200, description = "Class count and average bookings per start-time band", body = Vec<TimeSlotLoad>)
    ),
    tag = "analytics"
)]
pub async fn time_slots(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::time_slot_distribution(db.pool()).await?).into_response())
}

#[utoipa::path(
    get,
    path = "/api/analytics/heatmap",
    responses(
        (status = 200, description = "Workouts of the last 30 days by weekday and week of month", body = ActivityHeatmap)
    ),
    tag = "analytics"
)]
pub async fn heatmap(State(db): State<Database>) -> Result<Response, WebError> {
    Ok(Json(services::activity_heatmap(db.pool(), crate::today()).await?).into_response())
}
