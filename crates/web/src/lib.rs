use std::time::Duration;

use axum::Router;
use chrono::{Local, NaiveDate};
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
mod features;
mod ui;

pub use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::members::handlers::list_members,
        features::members::handlers::get_member,
        features::members::handlers::create_member,
        features::members::handlers::deactivate_member,
        features::members::handlers::list_expiring,
        features::members::handlers::member_workouts,
        features::members::handlers::member_activity,
        features::members::handlers::member_recommendations,
        features::trainers::handlers::list_trainers,
        features::trainers::handlers::get_trainer,
        features::trainers::handlers::create_trainer,
        features::trainers::handlers::deactivate_trainer,
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::delete_workout,
        features::classes::handlers::list_classes,
        features::classes::handlers::list_upcoming,
        features::classes::handlers::get_class,
        features::classes::handlers::create_class,
        features::classes::handlers::delete_class,
        features::classes::handlers::list_class_bookings,
        features::classes::handlers::book_class,
        features::classes::handlers::get_booking,
        features::classes::handlers::cancel_booking,
        features::analytics::handlers::memberships,
        features::analytics::handlers::trainer_ratings,
        features::analytics::handlers::monthly,
        features::analytics::handlers::popular_exercises,
        features::analytics::handlers::calories,
        features::analytics::handlers::trainer_load,
        features::analytics::handlers::time_slots,
        features::analytics::handlers::heatmap,
        features::dashboard::handlers::get_dashboard,
    ),
    components(
        schemas(
            storage::dto::member::CreateMemberRequest,
            storage::dto::member::ExpiringMember,
            storage::dto::trainer::CreateTrainerRequest,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::WorkoutRecordDetail,
            storage::dto::workout::MemberActivity,
            storage::dto::workout::DailyCalories,
            storage::dto::workout::ExerciseCount,
            storage::dto::workout::WorkoutRecommendation,
            storage::dto::class::CreateClassRequest,
            storage::dto::class::ClassListing,
            storage::dto::booking::BookClassRequest,
            storage::dto::booking::BookingDetail,
            storage::dto::dashboard::DashboardSummary,
            storage::dto::analytics::MembershipCount,
            storage::dto::analytics::TrainerRating,
            storage::dto::analytics::MonthlyActivity,
            storage::dto::analytics::PopularExercise,
            storage::dto::analytics::ExerciseCalories,
            storage::dto::analytics::TrainerLoad,
            storage::dto::analytics::TimeSlot,
            storage::dto::analytics::TimeSlotLoad,
            storage::dto::analytics::ActivityHeatmap,
            storage::models::Member,
            storage::models::MembershipType,
            storage::models::Status,
            storage::models::Trainer,
            storage::models::WorkoutRecord,
            storage::models::GymClass,
            storage::models::Booking,
            storage::models::BookingStatus,
        )
    ),
    tags(
        (name = "members", description = "Member registration and expiry"),
        (name = "trainers", description = "Trainer management"),
        (name = "workouts", description = "Workout records"),
        (name = "classes", description = "Class schedule"),
        (name = "bookings", description = "Class bookings"),
        (name = "analytics", description = "Aggregated statistics"),
        (name = "dashboard", description = "Daily overview"),
    )
)]
pub struct ApiDoc;

/// Current local date, the reference day for expiry, bookings and windows.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the full application: HTML views, JSON API and Swagger UI.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(ui::routes())
        .nest("/api", features::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(db)
}
