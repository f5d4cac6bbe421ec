//! Server-rendered HTML views. Every form posts, then redirects back to its
//! view with a `flash` outcome so a reload never resubmits.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use storage::{Database, error::StorageError};

use crate::error::WebError;

mod analytics;
mod charts;
mod classes;
mod dashboard;
mod layout;
mod members;
mod trainers;
mod workouts;

use layout::Flash;

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(dashboard::page))
        .route("/members", get(members::page).post(members::register))
        .route("/members/:id/deactivate", post(members::deactivate))
        .route("/workouts", get(workouts::page).post(workouts::create))
        .route("/workouts/:id/delete", post(workouts::delete))
        .route("/classes", get(classes::page).post(classes::create))
        .route("/classes/:id/delete", post(classes::delete))
        .route("/bookings", post(classes::book))
        .route("/bookings/:id/cancel", post(classes::cancel))
        .route("/trainers", get(trainers::page).post(trainers::register))
        .route("/trainers/:id/deactivate", post(trainers::deactivate))
        .route("/analytics", get(analytics::page))
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub flash: Option<Flash>,
}

/// Failure while rendering a view, shown as an HTML page
#[derive(Debug)]
pub struct UiError(WebError);

impl From<StorageError> for UiError {
    fn from(error: StorageError) -> Self {
        Self(WebError::from(error))
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Failed to render page");
        }

        let body = format!(
            "<p class=\"expired\">{}</p><p><a href=\"/\">Back to the dashboard</a></p>",
            layout::escape(&self.0.public_message())
        );

        (status, layout::page("Error", "/", None, &body)).into_response()
    }
}

type PageResult = Result<axum::response::Html<String>, UiError>;
