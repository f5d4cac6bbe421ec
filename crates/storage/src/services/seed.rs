use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::SqlitePool;

use crate::dto::workout::EXERCISES;
use crate::error::Result;
use crate::models::MembershipType;

/// (name, email, phone, plan, days since the membership started)
const DEMO_MEMBERS: [(&str, &str, &str, MembershipType, u64); 5] = [
    ("Kim Cheolsu", "kim@email.com", "010-1234-5678", MembershipType::Premium, 360),
    ("Lee Younghee", "lee@email.com", "010-2345-6789", MembershipType::General, 60),
    ("Park Minsu", "park@email.com", "010-3456-7890", MembershipType::Premium, 100),
    ("Choi Jieun", "choi@email.com", "010-4567-8901", MembershipType::General, 182),
    ("Jung Daeho", "jung@email.com", "010-5678-9012", MembershipType::Vip, 30),
];

/// (name, specialty, experience years, rating)
const DEMO_TRAINERS: [(&str, &str, i64, f64); 4] = [
    ("Coach Kim", "Weight training", 5, 4.8),
    ("Coach Lee", "Yoga/Pilates", 3, 4.7),
    ("Coach Park", "CrossFit", 7, 4.9),
    ("Coach Choi", "Swimming", 4, 4.6),
];

/// (class name, index into DEMO_TRAINERS, days from today, time, duration, capacity)
const DEMO_CLASSES: [(&str, usize, u64, &str, i64, i64); 4] = [
    ("Morning yoga", 1, 1, "07:00", 60, 15),
    ("Lunch CrossFit", 2, 1, "12:00", 45, 12),
    ("Evening weights", 0, 1, "19:00", 90, 8),
    ("Swimming lesson", 3, 2, "10:00", 60, 10),
];

pub const DEMO_WORKOUT_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoWorkout {
    pub member_id: i64,
    pub exercise_name: &'static str,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub duration: i64,
    pub calories_burned: i64,
    pub date: NaiveDate,
}

/// Random workouts spread over the 30 days before `today`.
pub fn demo_workouts<R: Rng>(rng: &mut R, member_ids: &[i64], today: NaiveDate) -> Vec<DemoWorkout> {
    if member_ids.is_empty() {
        return Vec::new();
    }

    (0..DEMO_WORKOUT_COUNT)
        .filter_map(|_| {
            let member_id = *member_ids.choose(rng)?;
            let exercise_name = *EXERCISES.choose(rng)?;
            let date = today.checked_sub_days(Days::new(rng.gen_range(1..=30)))?;

            Some(DemoWorkout {
                member_id,
                exercise_name,
                sets: rng.gen_range(3..=5),
                reps: rng.gen_range(8..=15),
                weight: f64::from(rng.gen_range(20..=100_i32)),
                duration: rng.gen_range(30..=90),
                calories_burned: rng.gen_range(150..=400),
                date,
            })
        })
        .collect()
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

/// Insert demo members, trainers, workouts and classes into an empty database.
///
/// Does nothing and returns `false` when at least one member already exists.
pub async fn seed_demo_data(pool: &SqlitePool, today: NaiveDate) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        tracing::debug!(existing, "Members present, skipping demo data");
        return Ok(false);
    }

    let mut member_ids = Vec::with_capacity(DEMO_MEMBERS.len());
    for (name, email, phone, membership_type, started_days_ago) in DEMO_MEMBERS {
        let start_date = days_before(today, started_days_ago);
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO members (name, email, phone, membership_type, start_date, end_date)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(membership_type)
        .bind(start_date)
        .bind(membership_type.end_date(start_date))
        .fetch_one(&mut *tx)
        .await?;
        member_ids.push(id);
    }

    let mut trainer_ids = Vec::with_capacity(DEMO_TRAINERS.len());
    for (name, specialty, experience_years, rating) in DEMO_TRAINERS {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO trainers (name, specialty, experience_years, rating)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(specialty)
        .bind(experience_years)
        .bind(rating)
        .fetch_one(&mut *tx)
        .await?;
        trainer_ids.push(id);
    }

    let workouts = demo_workouts(&mut rand::thread_rng(), &member_ids, today);
    for workout in &workouts {
        sqlx::query(
            r#"
            INSERT INTO workout_records
                (member_id, exercise_name, sets, reps, weight, duration, calories_burned, date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(workout.member_id)
        .bind(workout.exercise_name)
        .bind(workout.sets)
        .bind(workout.reps)
        .bind(workout.weight)
        .bind(workout.duration)
        .bind(workout.calories_burned)
        .bind(workout.date)
        .execute(&mut *tx)
        .await?;
    }

    for (class_name, trainer, days_ahead, time, duration, max_capacity) in DEMO_CLASSES {
        sqlx::query(
            r#"
            INSERT INTO classes (class_name, trainer_id, date, time, duration, max_capacity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(class_name)
        .bind(trainer_ids[trainer])
        .bind(days_after(today, days_ahead))
        .bind(time)
        .bind(duration)
        .bind(max_capacity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        members = member_ids.len(),
        trainers = trainer_ids.len(),
        workouts = workouts.len(),
        classes = DEMO_CLASSES.len(),
        "Seeded demo data"
    );

    Ok(true)
}
