use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::class::{ClassListing, CreateClassRequest};
use crate::error::{Result, StorageError};
use crate::models::GymClass;

const CLASS_COLUMNS: &str = "id, class_name, trainer_id, date, time, duration, max_capacity";

/// Seat counts are derived from confirmed bookings on every read.
const LISTING_SELECT: &str = r#"
    SELECT c.id, c.class_name, c.trainer_id, t.name AS trainer_name,
           c.date, c.time, c.duration, c.max_capacity,
           COUNT(b.id) AS current_bookings,
           c.max_capacity - COUNT(b.id) AS available_spots
    FROM classes c
    JOIN trainers t ON c.trainer_id = t.id
    LEFT JOIN bookings b ON b.class_id = c.id AND b.status = 'confirmed'
"#;

pub struct ClassRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClassRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All classes, latest first
    pub async fn list(&self) -> Result<Vec<ClassListing>> {
        let classes = sqlx::query_as::<_, ClassListing>(&format!(
            "{LISTING_SELECT} GROUP BY c.id ORDER BY c.date DESC, c.time DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    /// Classes on or after `today`, in schedule order
    pub async fn list_upcoming(&self, today: NaiveDate) -> Result<Vec<ClassListing>> {
        let classes = sqlx::query_as::<_, ClassListing>(&format!(
            "{LISTING_SELECT} WHERE c.date >= ? GROUP BY c.id ORDER BY c.date, c.time"
        ))
        .bind(today)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn find_listing(&self, id: i64) -> Result<ClassListing> {
        let class = sqlx::query_as::<_, ClassListing>(&format!(
            "{LISTING_SELECT} WHERE c.id = ? GROUP BY c.id"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(class)
    }

    pub async fn create(&self, req: &CreateClassRequest) -> Result<GymClass> {
        let time = req.normalized_time().ok_or_else(|| {
            StorageError::ConstraintViolation(format!("Invalid class time '{}'", req.time))
        })?;

        let class = sqlx::query_as::<_, GymClass>(&format!(
            r#"
            INSERT INTO classes (class_name, trainer_id, date, time, duration, max_capacity)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {CLASS_COLUMNS}
            "#
        ))
        .bind(req.class_name.trim())
        .bind(req.trainer_id)
        .bind(req.date)
        .bind(time)
        .bind(req.duration)
        .bind(req.max_capacity)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_reference_context("Trainer"))?;

        Ok(class)
    }

    /// Delete a class together with all of its bookings
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let bookings = sqlx::query("DELETE FROM bookings WHERE class_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        tracing::info!(class_id = id, bookings, "Deleted class and its bookings");

        Ok(bookings)
    }

    pub async fn count_upcoming(&self, today: NaiveDate) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE date >= ?")
            .bind(today)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
