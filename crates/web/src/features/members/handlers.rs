use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        member::{CreateMemberRequest, ExpiringMember, MemberFilter},
        workout::{MemberActivity, WorkoutRecommendation},
    },
    models::{Member, WorkoutRecord},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/members",
    params(MemberFilter),
    responses(
        (status = 200, description = "List members", body = Vec<Member>)
    ),
    tag = "members"
)]
pub async fn list_members(
    State(db): State<Database>,
    Query(filter): Query<MemberFilter>,
) -> Result<Response, WebError> {
    let members = services::list_members(db.pool(), filter.status).await?;

    Ok(Json(members).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member found", body = Member),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn get_member(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let member = services::get_member(db.pool(), id).await?;

    Ok(Json(member).into_response())
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member registered, end date derived from the plan", body = Member),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "members"
)]
pub async fn create_member(
    State(db): State<Database>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::register_member(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(member)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 204, description = "Member deactivated"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn deactivate_member(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::deactivate_member(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/expiring",
    responses(
        (status = 200, description = "Active members whose membership ends within 7 days", body = Vec<ExpiringMember>)
    ),
    tag = "members"
)]
pub async fn list_expiring(State(db): State<Database>) -> Result<Response, WebError> {
    let members = services::expiring_members(db.pool(), crate::today()).await?;

    Ok(Json(members).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}/workouts",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Workout history, newest first", body = Vec<WorkoutRecord>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn member_workouts(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let workouts = services::member_workouts(db.pool(), id).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}/activity",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Workout history with daily calories and exercise frequency", body = MemberActivity),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn member_activity(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let activity = services::member_activity(db.pool(), id).await?;

    Ok(Json(activity).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}/recommendations",
    params(
        ("id" = i64, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Suggested next workouts", body = Vec<WorkoutRecommendation>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn member_recommendations(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let plan = services::recommendations(db.pool(), id, crate::today()).await?;

    Ok(Json(plan).into_response())
}
