use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::trainer::{CreateTrainerRequest, TrainerFilter},
    models::Trainer,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/trainers",
    params(TrainerFilter),
    responses(
        (status = 200, description = "List trainers", body = Vec<Trainer>)
    ),
    tag = "trainers"
)]
pub async fn list_trainers(
    State(db): State<Database>,
    Query(filter): Query<TrainerFilter>,
) -> Result<Response, WebError> {
    let trainers = services::list_trainers(db.pool(), filter.status).await?;

    Ok(Json(trainers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/trainers/{id}",
    params(
        ("id" = i64, Path, description = "Trainer id")
    ),
    responses(
        (status = 200, description = "Trainer found", body = Trainer),
        (status = 404, description = "Trainer not found")
    ),
    tag = "trainers"
)]
pub async fn get_trainer(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let trainer = services::get_trainer(db.pool(), id).await?;

    Ok(Json(trainer).into_response())
}

#[utoipa::path(
    post,
    path = "/api/trainers",
    request_body = CreateTrainerRequest,
    responses(
        (status = 201, description = "Trainer registered", body = Trainer),
        (status = 400, description = "Validation error")
    ),
    tag = "trainers"
)]
pub async fn create_trainer(
    State(db): State<Database>,
    Json(req): Json<CreateTrainerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let trainer = services::register_trainer(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(trainer)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/trainers/{id}",
    params(
        ("id" = i64, Path, description = "Trainer id")
    ),
    responses(
        (status = 204, description = "Trainer deactivated"),
        (status = 404, description = "Trainer not found")
    ),
    tag = "trainers"
)]
pub async fn deactivate_trainer(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::deactivate_trainer(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
