mod common;

use axum::http::StatusCode;
use common::{
    app, create_class, create_member, create_trainer, days_from_today, get, post_form, post_json,
    today,
};
use serde_json::json;

fn member_form(name: &str, email: &str) -> String {
    format!(
        "name={name}&email={email}&phone=&membership_type=general&start_date={}",
        today()
    )
}

#[tokio::test]
async fn test_every_view_renders() {
    let app = app().await;

    for (path, heading) in [
        ("/", "Dashboard"),
        ("/members", "Register a member"),
        ("/workouts", "Workouts"),
        ("/classes", "Upcoming classes"),
        ("/trainers", "Trainers"),
        ("/analytics", "Analytics"),
    ] {
        let response = get(&app, path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains(heading), "{path}");
    }
}

#[tokio::test]
async fn test_register_form_redirects_with_outcome() {
    let app = app().await;

    let created = post_form(&app, "/members", &member_form("Kim", "kim%40email.com")).await;
    assert_eq!(created.status, StatusCode::SEE_OTHER);
    assert_eq!(
        created.location.as_deref(),
        Some("/members?flash=member_registered")
    );

    let duplicate = post_form(&app, "/members", &member_form("Kim+Two", "kim%40email.com")).await;
    assert_eq!(
        duplicate.location.as_deref(),
        Some("/members?flash=duplicate_email")
    );

    let page = get(&app, "/members?flash=duplicate_email").await;
    assert!(page.body.contains("This email is already registered."));
    assert!(page.body.contains("kim@email.com"));
}

#[tokio::test]
async fn test_incomplete_form_is_rejected_without_saving() {
    let app = app().await;

    let blank = post_form(&app, "/members", &member_form("", "kim%40email.com")).await;
    assert_eq!(
        blank.location.as_deref(),
        Some("/members?flash=invalid_input")
    );

    let missing = post_form(&app, "/members", "name=Kim").await;
    assert_eq!(
        missing.location.as_deref(),
        Some("/members?flash=invalid_input")
    );

    let members = get(&app, "/api/members").await.json();
    assert!(members.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_workout_form_returns_to_member() {
    let app = app().await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;

    let body = format!(
        "member_id={kim}&exercise_name=Squat&sets=3&reps=10&weight=60&duration=40&calories_burned=250&date={}",
        today()
    );
    let saved = post_form(&app, "/workouts", &body).await;

    assert_eq!(saved.status, StatusCode::SEE_OTHER);
    assert_eq!(
        saved.location,
        Some(format!("/workouts?member_id={kim}&flash=workout_saved"))
    );

    let page = get(&app, &format!("/workouts?member_id={kim}&flash=workout_saved")).await;
    assert!(page.body.contains("Workout saved."));
    assert!(page.body.contains("Recommended next workouts"));
    assert!(page.body.contains("Squat: 63kg"));
}

#[tokio::test]
async fn test_booking_form_reports_full_class() {
    let app = app().await;
    let trainer = create_trainer(&app, "Coach Park").await;
    let class = create_class(&app, trainer, 1).await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;
    let lee = create_member(&app, "Lee", "lee@email.com", today()).await;

    let booked = post_form(&app, "/bookings", &format!("class_id={class}&member_id={kim}")).await;
    assert_eq!(booked.location.as_deref(), Some("/classes?flash=booked"));

    let full = post_form(&app, "/bookings", &format!("class_id={class}&member_id={lee}")).await;
    assert_eq!(full.location.as_deref(), Some("/classes?flash=class_full"));

    let page = get(&app, "/classes?flash=class_full").await;
    assert!(page.body.contains("This class is full."));
}

#[tokio::test]
async fn test_deactivate_unknown_member_flashes_not_found() {
    let app = app().await;

    let response = post_form(&app, "/members/99/deactivate", "").await;

    assert_eq!(
        response.location.as_deref(),
        Some("/members?flash=not_found")
    );
}

#[tokio::test]
async fn test_past_class_can_be_deleted_from_class_view() {
    let app = app().await;
    let trainer = create_trainer(&app, "Coach Park").await;
    let created = post_json(
        &app,
        "/api/classes",
        json!({
            "class_name": "Last week's spin",
            "trainer_id": trainer,
            "date": days_from_today(-3),
            "time": "18:30",
            "duration": 45,
            "max_capacity": 10,
        }),
    )
    .await;
    let past = created.json()["id"].as_i64().unwrap();

    let page = get(&app, "/classes").await;
    assert!(page.body.contains("All classes"));
    assert!(page.body.contains(&format!("action=\"/classes/{past}/delete\"")));

    let deleted = post_form(&app, &format!("/classes/{past}/delete"), "").await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(
        deleted.location.as_deref(),
        Some("/classes?flash=class_deleted")
    );

    let classes = get(&app, "/api/classes").await.json();
    assert!(classes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_workout_delete_flashes_invalid_input() {
    let app = app().await;

    let response = post_form(&app, "/workouts/1/delete", "member_id=abc").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location.as_deref(),
        Some("/workouts?flash=invalid_input")
    );
}
