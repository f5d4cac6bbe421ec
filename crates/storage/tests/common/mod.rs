#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use storage::Database;
use storage::dto::class::CreateClassRequest;
use storage::dto::member::CreateMemberRequest;
use storage::dto::trainer::CreateTrainerRequest;
use storage::dto::workout::CreateWorkoutRequest;
use storage::models::{GymClass, Member, MembershipType, Trainer};
use storage::repository::class::ClassRepository;
use storage::repository::member::MemberRepository;
use storage::repository::trainer::TrainerRepository;
use storage::repository::workout::WorkoutRepository;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn db() -> Database {
    Database::in_memory().await.unwrap()
}

/// File-backed database with the regular connection pool. The directory
/// must outlive the database.
pub async fn file_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("gym.db").display());
    let db = Database::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    (dir, db)
}

pub async fn member_count(db: &Database) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
        .fetch_one(db.pool())
        .await
        .unwrap()
}

/// Confirmed bookings currently holding a seat in the class
pub async fn seats_taken(db: &Database, class_id: i64) -> i64 {
    ClassRepository::new(db.pool())
        .find_listing(class_id)
        .await
        .unwrap()
        .current_bookings
}

pub fn member_request(name: &str, email: &str, start_date: NaiveDate) -> CreateMemberRequest {
    CreateMemberRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some("010-0000-0000".to_string()),
        membership_type: MembershipType::General,
        start_date,
    }
}

pub async fn add_member(db: &Database, name: &str, email: &str, start_date: NaiveDate) -> Member {
    MemberRepository::new(db.pool())
        .create(&member_request(name, email, start_date))
        .await
        .unwrap()
}

pub async fn add_trainer(db: &Database, name: &str) -> Trainer {
    TrainerRepository::new(db.pool())
        .create(&CreateTrainerRequest {
            name: name.to_string(),
            specialty: "CrossFit".to_string(),
            experience_years: 5,
            rating: 4.5,
        })
        .await
        .unwrap()
}

pub async fn add_class(
    db: &Database,
    trainer_id: i64,
    date: NaiveDate,
    time: &str,
    max_capacity: i64,
) -> GymClass {
    ClassRepository::new(db.pool())
        .create(&CreateClassRequest {
            class_name: format!("Class at {time}"),
            trainer_id,
            date,
            time: time.to_string(),
            duration: 60,
            max_capacity,
        })
        .await
        .unwrap()
}

pub async fn log_workout(
    db: &Database,
    member_id: i64,
    exercise_name: &str,
    weight: f64,
    calories_burned: i64,
    date: NaiveDate,
) {
    WorkoutRepository::new(db.pool())
        .create(&CreateWorkoutRequest {
            member_id,
            exercise_name: exercise_name.to_string(),
            sets: 3,
            reps: 10,
            weight,
            duration: 30,
            calories_burned,
            date,
        })
        .await
        .unwrap();
}
