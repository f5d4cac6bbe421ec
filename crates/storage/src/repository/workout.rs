use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::workout::{
    CreateWorkoutRequest, DailyCalories, ExerciseCount, ExerciseStat, WorkoutRecordDetail,
};
use crate::error::{Result, StorageError};
use crate::models::WorkoutRecord;

const WORKOUT_COLUMNS: &str =
    "id, member_id, exercise_name, sets, reps, weight, duration, calories_burned, date";

pub struct WorkoutRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every record with its member's name, newest first
    pub async fn list_detailed(&self) -> Result<Vec<WorkoutRecordDetail>> {
        let records = sqlx::query_as::<_, WorkoutRecordDetail>(
            r#"
            SELECT wr.id, wr.member_id, m.name AS member_name, wr.exercise_name,
                   wr.sets, wr.reps, wr.weight, wr.duration, wr.calories_burned, wr.date
            FROM workout_records wr
            JOIN members m ON wr.member_id = m.id
            ORDER BY wr.date DESC, wr.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    pub async fn list_for_member(&self, member_id: i64) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workout_records
            WHERE member_id = ?
            ORDER BY date DESC, id DESC
            "#
        ))
        .bind(member_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workout_records WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(record)
    }

    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workout_records
                (member_id, exercise_name, sets, reps, weight, duration, calories_burned, date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(req.member_id)
        .bind(req.exercise_name.trim())
        .bind(req.sets)
        .bind(req.reps)
        .bind(req.weight)
        .bind(req.duration)
        .bind(req.calories_burned)
        .bind(req.date)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_reference_context("Member"))?;

        Ok(record)
    }

    /// Hard delete
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_records WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count_on(&self, date: NaiveDate) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_records WHERE date = ?")
                .bind(date)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Per-exercise frequency and average weight since `since` (inclusive),
    /// most frequent first
    pub async fn exercise_stats_since(
        &self,
        member_id: i64,
        since: NaiveDate,
    ) -> Result<Vec<ExerciseStat>> {
        let stats = sqlx::query_as::<_, ExerciseStat>(
            r#"
            SELECT exercise_name, AVG(weight) AS avg_weight, COUNT(*) AS frequency
            FROM workout_records
            WHERE member_id = ? AND date >= ?
            GROUP BY exercise_name
            ORDER BY frequency DESC, exercise_name ASC
            "#,
        )
        .bind(member_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn daily_calories(&self, member_id: i64) -> Result<Vec<DailyCalories>> {
        let rows = sqlx::query_as::<_, DailyCalories>(
            r#"
            SELECT date, SUM(calories_burned) AS calories
            FROM workout_records
            WHERE member_id = ?
            GROUP BY date
            ORDER BY date
            "#,
        )
        .bind(member_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn exercise_frequency(&self, member_id: i64) -> Result<Vec<ExerciseCount>> {
        let rows = sqlx::query_as::<_, ExerciseCount>(
            r#"
            SELECT exercise_name, COUNT(*) AS count
            FROM workout_records
            WHERE member_id = ?
            GROUP BY exercise_name
            ORDER BY count DESC, exercise_name ASC
            "#,
        )
        .bind(member_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
