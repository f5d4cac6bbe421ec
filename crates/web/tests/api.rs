mod common;

use axum::http::StatusCode;
use common::{
    app, create_class, create_member, create_trainer, days_from_today, delete, get, post_json,
    today,
};
use serde_json::json;

#[tokio::test]
async fn test_register_member_computes_end_date() {
    let app = app().await;

    let response = post_json(
        &app,
        "/api/members",
        json!({
            "name": "Kim Cheolsu",
            "email": "kim@email.com",
            "phone": "010-1234-5678",
            "membership_type": "premium",
            "start_date": "2024-01-15",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let member = response.json();
    assert_eq!(member["end_date"], "2025-01-14");
    assert_eq!(member["status"], "active");
    assert_eq!(member["membership_type"], "premium");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = app().await;
    create_member(&app, "Kim", "kim@email.com", today()).await;

    let response = post_json(
        &app,
        "/api/members",
        json!({
            "name": "Another Kim",
            "email": "kim@email.com",
            "membership_type": "vip",
            "start_date": today(),
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.json()["error"],
        "Email kim@email.com is already registered"
    );
    let members = get(&app, "/api/members").await.json();
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_name_fails_validation() {
    let app = app().await;

    let response = post_json(
        &app,
        "/api/members",
        json!({
            "name": "  ",
            "email": "kim@email.com",
            "membership_type": "general",
            "start_date": today(),
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "Validation failed");
    assert!(
        body["details"]
            .as_array()
            .unwrap()
            .iter()
            .any(|d| d.as_str().unwrap().starts_with("name:"))
    );
}

#[tokio::test]
async fn test_member_status_filter_and_deactivate() {
    let app = app().await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;
    create_member(&app, "Lee", "lee@email.com", today()).await;

    assert_eq!(
        delete(&app, &format!("/api/members/{kim}")).await.status,
        StatusCode::NO_CONTENT
    );

    let active = get(&app, "/api/members?status=active").await.json();
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["name"], "Lee");

    let inactive = get(&app, "/api/members?status=inactive").await.json();
    assert_eq!(inactive[0]["id"], kim);

    assert_eq!(
        delete(&app, "/api/members/999").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_expiring_members_endpoint() {
    let app = app().await;
    // General plans last 180 days.
    create_member(&app, "Soon", "soon@email.com", days_from_today(-178)).await;
    create_member(&app, "Later", "later@email.com", days_from_today(-100)).await;

    let expiring = get(&app, "/api/members/expiring").await.json();

    let expiring = expiring.as_array().unwrap();
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0]["name"], "Soon");
    assert_eq!(expiring[0]["days_left"], 2);
    assert_eq!(expiring[0]["expired"], false);
}

#[tokio::test]
async fn test_workouts_and_recommendations() {
    let app = app().await;
    let kim = create_member(&app, "Kim", "kim@email.com", days_from_today(-10)).await;

    let beginner = get(&app, &format!("/api/members/{kim}/recommendations"))
        .await
        .json();
    assert_eq!(beginner.as_array().unwrap().len(), 3);
    assert_eq!(beginner[0]["kind"], "beginner");
    assert_eq!(beginner[0]["exercise_name"], "Squat");

    for weight in [95.0, 105.0] {
        let response = post_json(
            &app,
            "/api/workouts",
            json!({
                "member_id": kim,
                "exercise_name": "Squat",
                "sets": 3,
                "reps": 10,
                "weight": weight,
                "duration": 40,
                "calories_burned": 250,
                "date": days_from_today(-1),
            }),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }

    let plan = get(&app, &format!("/api/members/{kim}/recommendations"))
        .await
        .json();
    assert_eq!(plan.as_array().unwrap().len(), 1);
    assert_eq!(plan[0]["kind"], "progression");
    assert_eq!(plan[0]["weight_kg"], 105);
    assert_eq!(plan[0]["sets"], 3);

    let activity = get(&app, &format!("/api/members/{kim}/activity")).await.json();
    assert_eq!(activity["workouts"].as_array().unwrap().len(), 2);
    assert_eq!(activity["daily_calories"][0]["calories"], 500);
    assert_eq!(activity["exercise_frequency"][0]["count"], 2);

    let all = get(&app, "/api/workouts").await.json();
    assert_eq!(all[0]["member_name"], "Kim");
    let id = all[0]["id"].as_i64().unwrap();
    assert_eq!(
        delete(&app, &format!("/api/workouts/{id}")).await.status,
        StatusCode::NO_CONTENT
    );
    let history = get(&app, &format!("/api/members/{kim}/workouts")).await.json();
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_workout_out_of_range_is_rejected() {
    let app = app().await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;

    let response = post_json(
        &app,
        "/api/workouts",
        json!({
            "member_id": kim,
            "exercise_name": "Squat",
            "sets": 11,
            "reps": 10,
            "weight": -5.0,
            "duration": 40,
            "calories_burned": 250,
            "date": today(),
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_member_is_not_found() {
    let app = app().await;

    for uri in [
        "/api/members/42",
        "/api/members/42/workouts",
        "/api/members/42/activity",
        "/api/members/42/recommendations",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.json()["error"], "Resource not found");
    }
}

#[tokio::test]
async fn test_booking_respects_capacity() {
    let app = app().await;
    let trainer = create_trainer(&app, "Coach Park").await;
    let class = create_class(&app, trainer, 1).await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;
    let lee = create_member(&app, "Lee", "lee@email.com", today()).await;
    let bookings_uri = format!("/api/classes/{class}/bookings");

    let first = post_json(&app, &bookings_uri, json!({ "member_id": kim })).await;
    assert_eq!(first.status, StatusCode::CREATED);
    let booking_id = first.json()["id"].as_i64().unwrap();

    let second = post_json(&app, &bookings_uri, json!({ "member_id": lee })).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.json()["error"],
        format!("Class {class} is fully booked")
    );

    let listing = get(&app, &format!("/api/classes/{class}")).await.json();
    assert_eq!(listing["current_bookings"], 1);
    assert_eq!(listing["available_spots"], 0);

    assert_eq!(
        delete(&app, &format!("/api/bookings/{booking_id}")).await.status,
        StatusCode::NO_CONTENT
    );
    let retry = post_json(&app, &bookings_uri, json!({ "member_id": lee })).await;
    assert_eq!(retry.status, StatusCode::CREATED);

    let bookings = get(&app, &bookings_uri).await.json();
    let statuses: Vec<&str> = bookings
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["cancelled", "confirmed"]);
}

#[tokio::test]
async fn test_booking_unknown_class_is_not_found() {
    let app = app().await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;

    let response = post_json(&app, "/api/classes/77/bookings", json!({ "member_id": kim })).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_class_removes_bookings() {
    let app = app().await;
    let trainer = create_trainer(&app, "Coach Park").await;
    let class = create_class(&app, trainer, 5).await;
    let kim = create_member(&app, "Kim", "kim@email.com", today()).await;
    let booking = post_json(
        &app,
        &format!("/api/classes/{class}/bookings"),
        json!({ "member_id": kim }),
    )
    .await
    .json();

    assert_eq!(
        delete(&app, &format!("/api/classes/{class}")).await.status,
        StatusCode::NO_CONTENT
    );

    assert_eq!(
        get(&app, &format!("/api/classes/{class}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app, &format!("/api/bookings/{}", booking["id"])).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_class_validation_and_missing_trainer() {
    let app = app().await;

    let invalid = post_json(
        &app,
        "/api/classes",
        json!({
            "class_name": "Yoga",
            "trainer_id": 1,
            "date": days_from_today(1),
            "time": "noon",
            "duration": 20,
            "max_capacity": 5,
        }),
    )
    .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let orphan = post_json(
        &app,
        "/api/classes",
        json!({
            "class_name": "Yoga",
            "trainer_id": 99,
            "date": days_from_today(1),
            "time": "07:00",
            "duration": 60,
            "max_capacity": 5,
        }),
    )
    .await;
    assert_eq!(orphan.status, StatusCode::CONFLICT);
    assert_eq!(
        orphan.json()["error"],
        "Constraint violation: Trainer does not exist"
    );
}

#[tokio::test]
async fn test_upcoming_classes_and_dashboard() {
    let app = app().await;
    let trainer = create_trainer(&app, "Coach Kim").await;
    create_class(&app, trainer, 8).await;
    create_member(&app, "Soon", "soon@email.com", days_from_today(-180)).await;

    let upcoming = get(&app, "/api/classes/upcoming").await.json();
    assert_eq!(upcoming.as_array().unwrap().len(), 1);
    assert_eq!(upcoming[0]["trainer_name"], "Coach Kim");

    let dashboard = get(&app, "/api/dashboard").await.json();
    assert_eq!(dashboard["active_members"], 1);
    assert_eq!(dashboard["active_trainers"], 1);
    assert_eq!(dashboard["workouts_today"], 0);
    assert_eq!(dashboard["upcoming_classes"], 1);
    assert_eq!(dashboard["expiring_members"][0]["expired"], true);
}

#[tokio::test]
async fn test_trainers_endpoints() {
    let app = app().await;
    let id = create_trainer(&app, "Coach Choi").await;

    let trainer = get(&app, &format!("/api/trainers/{id}")).await.json();
    assert_eq!(trainer["rating"], 4.5);

    let invalid = post_json(
        &app,
        "/api/trainers",
        json!({
            "name": "Coach Nobody",
            "specialty": "Boxing",
            "experience_years": 31,
            "rating": 6.0,
        }),
    )
    .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    assert_eq!(
        delete(&app, &format!("/api/trainers/{id}")).await.status,
        StatusCode::NO_CONTENT
    );
    let active = get(&app, "/api/trainers?status=active").await.json();
    assert!(active.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_analytics_endpoints_respond() {
    let app = app().await;

    for path in [
        "memberships",
        "trainer-ratings",
        "monthly",
        "popular-exercises",
        "calories",
        "trainer-load",
        "time-slots",
    ] {
        let response = get(&app, &format!("/api/analytics/{path}")).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.json().as_array().unwrap().is_empty(), "{path}");
    }

    let heatmap = get(&app, "/api/analytics/heatmap").await.json();
    assert_eq!(heatmap["counts"].as_array().unwrap().len(), 7);
    assert_eq!(heatmap["weekdays"][0], "Monday");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = app().await;

    let doc = get(&app, "/api-docs/openapi.json").await.json();

    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/members"));
    assert!(paths.contains_key("/api/classes/{id}/bookings"));
    assert!(paths.contains_key("/api/analytics/heatmap"));
}
