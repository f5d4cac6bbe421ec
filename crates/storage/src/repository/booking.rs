use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::booking::BookingDetail;
use crate::error::{Result, StorageError};
use crate::models::{Booking, BookingStatus, Status};

pub struct BookingRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookingRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Book a seat for `member_id` in `class_id`.
    ///
    /// The member check, the capacity check and the insert are one
    /// conditional write, the first statement of the transaction. SQLite
    /// takes the write lock up front, so concurrent callers queue on the busy
    /// timeout instead of failing a lock upgrade, and two bookings can never
    /// both take the last seat. Fails with [`StorageError::ClassFull`] when no
    /// seat is left.
    pub async fn book(&self, class_id: i64, member_id: i64, today: NaiveDate) -> Result<Booking> {
        let mut tx = self.pool.begin().await?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (member_id, class_id, booking_date, status)
            SELECT m.id, c.id, ?, ?
            FROM classes c
            JOIN members m ON m.id = ? AND m.status = ?
            WHERE c.id = ?
              AND (SELECT COUNT(*) FROM bookings b
                   WHERE b.class_id = c.id AND b.status = ?) < c.max_capacity
            RETURNING id, member_id, class_id, booking_date, status
            "#,
        )
        .bind(today)
        .bind(BookingStatus::Confirmed)
        .bind(member_id)
        .bind(Status::Active)
        .bind(class_id)
        .bind(BookingStatus::Confirmed)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(booking) = booking else {
            // Nothing inserted; the transaction already holds the write lock,
            // so these reads see the state the insert was rejected on.
            let member_status =
                sqlx::query_scalar::<_, Status>("SELECT status FROM members WHERE id = ?")
                    .bind(member_id)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or(StorageError::NotFound)?;

            if !member_status.is_active() {
                return Err(StorageError::ConstraintViolation(format!(
                    "Member {member_id} is inactive"
                )));
            }

            let class_exists =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE id = ?")
                    .bind(class_id)
                    .fetch_one(&mut *tx)
                    .await?
                    > 0;

            return if class_exists {
                tracing::warn!(class_id, member_id, "Booking rejected, class is full");
                Err(StorageError::ClassFull { class_id })
            } else {
                Err(StorageError::NotFound)
            };
        };

        tx.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            class_id,
            member_id,
            "Class booked"
        );

        Ok(booking)
    }

    /// Release a confirmed booking's seat
    pub async fn cancel(&self, booking_id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ? AND status = ?")
            .bind(BookingStatus::Cancelled)
            .bind(booking_id)
            .bind(BookingStatus::Confirmed)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn find_by_id(&self, booking_id: i64) -> Result<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            "SELECT id, member_id, class_id, booking_date, status FROM bookings WHERE id = ?",
        )
        .bind(booking_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(booking)
    }

    pub async fn list_for_class(&self, class_id: i64) -> Result<Vec<BookingDetail>> {
        let bookings = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT b.id, b.class_id, b.member_id, m.name AS member_name,
                   b.booking_date, b.status
            FROM bookings b
            JOIN members m ON b.member_id = m.id
            WHERE b.class_id = ?
            ORDER BY b.id
            "#,
        )
        .bind(class_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }
}
