use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, WorkoutRecordDetail},
    models::WorkoutRecord,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "All workout records with member names, newest first", body = Vec<WorkoutRecordDetail>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> Result<Response, WebError> {
    let workouts = services::list_workouts(db.pool()).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutRecord),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Member does not exist")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let record = services::log_workout(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout record id")
    ),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_workout(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
