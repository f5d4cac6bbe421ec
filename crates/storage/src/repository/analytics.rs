use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use crate::dto::analytics::{
    ActivityHeatmap, ExerciseCalories, HeatmapCell, MembershipCount, MonthlyActivity,
    PopularExercise, TimeSlot, TimeSlotLoad, TrainerLoad, TrainerRating,
};
use crate::error::Result;
use crate::models::Status;

/// Per-class confirmed booking counts, shared by the class-load aggregates.
const CLASS_LOAD: &str = r#"
    SELECT c.id, c.trainer_id, c.time,
           (SELECT COUNT(*) FROM bookings b
            WHERE b.class_id = c.id AND b.status = 'confirmed') AS bookings
    FROM classes c
"#;

#[derive(FromRow)]
struct TimeSlotRow {
    slot: i64,
    class_count: i64,
    avg_bookings: f64,
}

/// Read-only aggregates behind the dashboard charts
pub struct AnalyticsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn membership_distribution(&self) -> Result<Vec<MembershipCount>> {
        let rows = sqlx::query_as::<_, MembershipCount>(
            r#"
            SELECT membership_type, COUNT(*) AS count
            FROM members
            WHERE status = ?
            GROUP BY membership_type
            ORDER BY count DESC, membership_type
            "#,
        )
        .bind(Status::Active)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn trainer_ratings(&self) -> Result<Vec<TrainerRating>> {
        let rows = sqlx::query_as::<_, TrainerRating>(
            r#"
            SELECT name, rating, specialty
            FROM trainers
            WHERE status = ?
            ORDER BY rating DESC, name
            "#,
        )
        .bind(Status::Active)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn monthly_activity(&self) -> Result<Vec<MonthlyActivity>> {
        let rows = sqlx::query_as::<_, MonthlyActivity>(
            r#"
            SELECT strftime('%Y-%m', date) AS month,
                   COUNT(*) AS workout_count,
                   AVG(calories_burned) AS avg_calories,
                   SUM(calories_burned) AS total_calories
            FROM workout_records
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Ten most logged exercises
    pub async fn popular_exercises(&self) -> Result<Vec<PopularExercise>> {
        let rows = sqlx::query_as::<_, PopularExercise>(
            r#"
            SELECT exercise_name,
                   COUNT(*) AS frequency,
                   AVG(weight) AS avg_weight,
                   AVG(calories_burned) AS avg_calories
            FROM workout_records
            GROUP BY exercise_name
            ORDER BY frequency DESC, exercise_name
            LIMIT 10
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Eight exercises with the highest average calorie burn
    pub async fn calories_by_exercise(&self) -> Result<Vec<ExerciseCalories>> {
        let rows = sqlx::query_as::<_, ExerciseCalories>(
            r#"
            SELECT exercise_name, AVG(calories_burned) AS avg_calories
            FROM workout_records
            GROUP BY exercise_name
            ORDER BY avg_calories DESC, exercise_name
            LIMIT 8
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Classes taught and average seats booked, per active trainer
    pub async fn trainer_load(&self) -> Result<Vec<TrainerLoad>> {
        let rows = sqlx::query_as::<_, TrainerLoad>(&format!(
            r#"
            SELECT t.name, t.specialty,
                   COUNT(cl.id) AS class_count,
                   COALESCE(AVG(cl.bookings), 0.0) AS avg_bookings
            FROM trainers t
            LEFT JOIN ({CLASS_LOAD}) cl ON cl.trainer_id = t.id
            WHERE t.status = ?
            GROUP BY t.id
            ORDER BY class_count DESC, t.name
            "#
        ))
        .bind(Status::Active)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Classes bucketed into five start-time bands, busiest band first
    pub async fn time_slot_distribution(&self) -> Result<Vec<TimeSlotLoad>> {
        let rows = sqlx::query_as::<_, TimeSlotRow>(&format!(
            r#"
            SELECT CASE
                       WHEN CAST(substr(cl.time, 1, 2) AS INTEGER) < 9 THEN 0
                       WHEN CAST(substr(cl.time, 1, 2) AS INTEGER) < 12 THEN 1
                       WHEN CAST(substr(cl.time, 1, 2) AS INTEGER) < 15 THEN 2
                       WHEN CAST(substr(cl.time, 1, 2) AS INTEGER) < 18 THEN 3
                       ELSE 4
                   END AS slot,
                   COUNT(*) AS class_count,
                   AVG(cl.bookings) AS avg_bookings
            FROM ({CLASS_LOAD}) cl
            GROUP BY slot
            ORDER BY avg_bookings DESC, slot
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        let loads = rows
            .into_iter()
            .filter_map(|row| {
                TimeSlot::from_index(row.slot).map(|slot| TimeSlotLoad {
                    slot,
                    label: slot.label().to_string(),
                    class_count: row.class_count,
                    avg_bookings: row.avg_bookings,
                })
            })
            .collect();

        Ok(loads)
    }

    /// Workout counts by weekday and week of month for records dated on or
    /// after `since`
    pub async fn activity_heatmap(&self, since: NaiveDate) -> Result<ActivityHeatmap> {
        let cells = sqlx::query_as::<_, HeatmapCell>(
            r#"
            SELECT CAST(strftime('%w', date) AS INTEGER) AS weekday,
                   CASE
                       WHEN CAST(substr(date, 9, 2) AS INTEGER) <= 7 THEN 1
                       WHEN CAST(substr(date, 9, 2) AS INTEGER) <= 14 THEN 2
                       WHEN CAST(substr(date, 9, 2) AS INTEGER) <= 21 THEN 3
                       ELSE 4
                   END AS week,
                   COUNT(*) AS workout_count
            FROM workout_records
            WHERE date >= ?
            GROUP BY weekday, week
            "#,
        )
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(ActivityHeatmap::from_cells(&cells))
    }
}
