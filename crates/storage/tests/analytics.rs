mod common;

use common::{add_class, add_member, add_trainer, date, db, log_workout};
use storage::dto::analytics::TimeSlot;
use storage::models::MembershipType;
use storage::repository::analytics::AnalyticsRepository;
use storage::repository::booking::BookingRepository;
use storage::repository::member::MemberRepository;
use storage::repository::trainer::TrainerRepository;

#[tokio::test]
async fn test_membership_distribution_counts_active_members() {
    let db = db().await;
    let members = MemberRepository::new(db.pool());

    for (i, membership_type) in [
        MembershipType::General,
        MembershipType::General,
        MembershipType::Vip,
        MembershipType::Premium,
    ]
    .into_iter()
    .enumerate()
    {
        let mut req = common::member_request("M", &format!("m{i}@example.com"), date(2026, 1, 1));
        req.membership_type = membership_type;
        let member = members.create(&req).await.unwrap();
        if membership_type == MembershipType::Premium {
            members.deactivate(member.id).await.unwrap();
        }
    }

    let distribution = AnalyticsRepository::new(db.pool())
        .membership_distribution()
        .await
        .unwrap();

    let counts: Vec<(MembershipType, i64)> = distribution
        .into_iter()
        .map(|row| (row.membership_type, row.count))
        .collect();
    assert_eq!(
        counts,
        vec![(MembershipType::General, 2), (MembershipType::Vip, 1)]
    );
}

#[tokio::test]
async fn test_trainer_ratings_and_load() {
    let db = db().await;
    let today = date(2026, 10, 19);
    let kim = add_trainer(&db, "Coach Kim").await;
    let lee = add_trainer(&db, "Coach Lee").await;
    let retired = add_trainer(&db, "Coach Retired").await;
    TrainerRepository::new(db.pool())
        .deactivate(retired.id)
        .await
        .unwrap();
    sqlx::query("UPDATE trainers SET rating = 4.9 WHERE id = ?")
        .bind(lee.id)
        .execute(db.pool())
        .await
        .unwrap();

    let morning = add_class(&db, kim.id, date(2026, 10, 20), "07:00", 5).await;
    add_class(&db, kim.id, date(2026, 10, 21), "19:00", 5).await;
    let member = add_member(&db, "Park", "park@example.com", date(2026, 1, 1)).await;
    BookingRepository::new(db.pool())
        .book(morning.id, member.id, today)
        .await
        .unwrap();

    let analytics = AnalyticsRepository::new(db.pool());

    let ratings = analytics.trainer_ratings().await.unwrap();
    let names: Vec<&str> = ratings.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Coach Lee", "Coach Kim"]);

    let load = analytics.trainer_load().await.unwrap();
    assert_eq!(load.len(), 2);
    assert_eq!(load[0].name, "Coach Kim");
    assert_eq!(load[0].class_count, 2);
    assert!((load[0].avg_bookings - 0.5).abs() < f64::EPSILON);
    assert_eq!(load[1].name, "Coach Lee");
    assert_eq!(load[1].class_count, 0);
    assert_eq!(load[1].avg_bookings, 0.0);
}

#[tokio::test]
async fn test_workout_aggregates() {
    let db = db().await;
    let kim = add_member(&db, "Kim", "kim@example.com", date(2026, 1, 1)).await;

    log_workout(&db, kim.id, "Cycling", 0.0, 100, date(2026, 9, 10)).await;
    log_workout(&db, kim.id, "Squat", 80.0, 200, date(2026, 10, 5)).await;
    log_workout(&db, kim.id, "Squat", 100.0, 300, date(2026, 10, 5)).await;
    log_workout(&db, kim.id, "Treadmill", 0.0, 400, date(2026, 10, 25)).await;

    let analytics = AnalyticsRepository::new(db.pool());

    let monthly = analytics.monthly_activity().await.unwrap();
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2026-09");
    assert_eq!(monthly[1].month, "2026-10");
    assert_eq!(monthly[1].workout_count, 3);
    assert_eq!(monthly[1].total_calories, 900);
    assert!((monthly[1].avg_calories - 300.0).abs() < f64::EPSILON);

    let popular = analytics.popular_exercises().await.unwrap();
    assert_eq!(popular[0].exercise_name, "Squat");
    assert_eq!(popular[0].frequency, 2);
    assert!((popular[0].avg_weight - 90.0).abs() < f64::EPSILON);

    let calories = analytics.calories_by_exercise().await.unwrap();
    let order: Vec<&str> = calories.iter().map(|c| c.exercise_name.as_str()).collect();
    assert_eq!(order, vec!["Treadmill", "Squat", "Cycling"]);

    let heatmap = analytics
        .activity_heatmap(date(2026, 9, 15))
        .await
        .unwrap();
    assert_eq!(heatmap.weekdays[0], "Monday");
    // 2026-10-05 is a Monday in week 1, 2026-10-25 a Sunday in week 4.
    assert_eq!(heatmap.counts[0], vec![2, 0, 0, 0]);
    assert_eq!(heatmap.counts[6], vec![0, 0, 0, 1]);
    assert_eq!(heatmap.total(), 3);
}

#[tokio::test]
async fn test_time_slot_distribution() {
    let db = db().await;
    let today = date(2026, 10, 19);
    let trainer = add_trainer(&db, "Coach Kim").await;
    let dawn = add_class(&db, trainer.id, date(2026, 10, 20), "07:00", 5).await;
    let morning = add_class(&db, trainer.id, date(2026, 10, 20), "10:30", 5).await;
    add_class(&db, trainer.id, date(2026, 10, 20), "19:00", 5).await;

    let bookings = BookingRepository::new(db.pool());
    for i in 0..2 {
        let member = add_member(&db, "M", &format!("m{i}@example.com"), date(2026, 1, 1)).await;
        bookings.book(dawn.id, member.id, today).await.unwrap();
        if i == 0 {
            bookings.book(morning.id, member.id, today).await.unwrap();
        }
    }

    let slots = AnalyticsRepository::new(db.pool())
        .time_slot_distribution()
        .await
        .unwrap();

    let summary: Vec<(TimeSlot, i64)> = slots.iter().map(|s| (s.slot, s.class_count)).collect();
    assert_eq!(
        summary,
        vec![
            (TimeSlot::Dawn, 1),
            (TimeSlot::Morning, 1),
            (TimeSlot::Evening, 1),
        ]
    );
    assert_eq!(slots[0].label, "Dawn (06-09)");
    assert!((slots[0].avg_bookings - 2.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_empty_database_has_empty_aggregates() {
    let db = db().await;
    let analytics = AnalyticsRepository::new(db.pool());

    assert!(analytics.membership_distribution().await.unwrap().is_empty());
    assert!(analytics.monthly_activity().await.unwrap().is_empty());
    assert!(analytics.time_slot_distribution().await.unwrap().is_empty());

    let heatmap = analytics.activity_heatmap(date(2026, 1, 1)).await.unwrap();
    assert_eq!(heatmap.counts.len(), 7);
    assert_eq!(heatmap.max_count(), 0);
}
