use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::dashboard::DashboardSummary};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Headline counts and expiry warnings for today", body = DashboardSummary)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(db): State<Database>) -> Result<Response, WebError> {
    let summary = services::summary(db.pool(), crate::today()).await?;

    Ok(Json(summary).into_response())
}
