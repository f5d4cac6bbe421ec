use chrono::NaiveDate;
use sqlx::SqlitePool;
use storage::{
    dto::{
        booking::BookingDetail,
        class::{ClassListing, CreateClassRequest},
    },
    error::Result,
    models::{Booking, GymClass},
    repository::{booking::BookingRepository, class::ClassRepository},
};

pub async fn list_classes(pool: &SqlitePool) -> Result<Vec<ClassListing>> {
    let repo = ClassRepository::new(pool);
    repo.list().await
}

pub async fn upcoming_classes(pool: &SqlitePool, today: NaiveDate) -> Result<Vec<ClassListing>> {
    let repo = ClassRepository::new(pool);
    repo.list_upcoming(today).await
}

pub async fn get_class(pool: &SqlitePool, id: i64) -> Result<ClassListing> {
    let repo = ClassRepository::new(pool);
    repo.find_listing(id).await
}

pub async fn schedule_class(pool: &SqlitePool, request: &CreateClassRequest) -> Result<GymClass> {
    let repo = ClassRepository::new(pool);
    let class = repo.create(request).await?;
    tracing::info!(
        class_id = class.id,
        trainer_id = class.trainer_id,
        date = %class.date,
        time = %class.time,
        "Class scheduled"
    );
    Ok(class)
}

/// Delete a class and every booking that references it
pub async fn delete_class(pool: &SqlitePool, id: i64) -> Result<u64> {
    let repo = ClassRepository::new(pool);
    repo.delete(id).await
}

pub async fn class_bookings(pool: &SqlitePool, class_id: i64) -> Result<Vec<BookingDetail>> {
    ClassRepository::new(pool).find_listing(class_id).await?;
    BookingRepository::new(pool).list_for_class(class_id).await
}

pub async fn book_class(
    pool: &SqlitePool,
    class_id: i64,
    member_id: i64,
    today: NaiveDate,
) -> Result<Booking> {
    let repo = BookingRepository::new(pool);
    repo.book(class_id, member_id, today).await
}

pub async fn get_booking(pool: &SqlitePool, id: i64) -> Result<Booking> {
    let repo = BookingRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn cancel_booking(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = BookingRepository::new(pool);
    repo.cancel(id).await?;
    tracing::info!(booking_id = id, "Booking cancelled");
    Ok(())
}
