use chrono::NaiveDate;
use sqlx::SqlitePool;
use storage::{
    dto::dashboard::DashboardSummary,
    error::Result,
    repository::{
        class::ClassRepository, member::MemberRepository, trainer::TrainerRepository,
        workout::WorkoutRepository,
    },
    services::membership,
};

pub async fn summary(pool: &SqlitePool, today: NaiveDate) -> Result<DashboardSummary> {
    Ok(DashboardSummary {
        active_members: MemberRepository::new(pool).count_active().await?,
        active_trainers: TrainerRepository::new(pool).count_active().await?,
        workouts_today: WorkoutRepository::new(pool).count_on(today).await?,
        upcoming_classes: ClassRepository::new(pool).count_upcoming(today).await?,
        expiring_members: membership::expiring_members(pool, today).await?,
    })
}
