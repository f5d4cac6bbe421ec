#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{Days, Local, NaiveDate};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;

pub async fn app() -> Router {
    let db = Database::in_memory().await.unwrap();
    web::app(db)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    if days >= 0 {
        today() + Days::new(days as u64)
    } else {
        today() - Days::new(days.unsigned_abs())
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn create_member(app: &Router, name: &str, email: &str, start_date: NaiveDate) -> i64 {
    let response = post_json(
        app,
        "/api/members",
        json!({
            "name": name,
            "email": email,
            "membership_type": "general",
            "start_date": start_date,
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.json()["id"].as_i64().unwrap()
}

pub async fn create_trainer(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/trainers",
        json!({
            "name": name,
            "specialty": "CrossFit",
            "experience_years": 4,
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.json()["id"].as_i64().unwrap()
}

pub async fn create_class(app: &Router, trainer_id: i64, max_capacity: i64) -> i64 {
    let response = post_json(
        app,
        "/api/classes",
        json!({
            "class_name": "Lunch CrossFit",
            "trainer_id": trainer_id,
            "date": days_from_today(1),
            "time": "12:00",
            "duration": 45,
            "max_capacity": max_capacity,
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.json()["id"].as_i64().unwrap()
}
