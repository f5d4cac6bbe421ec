use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;
use storage::{
    dto::analytics::{
        ActivityHeatmap, ExerciseCalories, MembershipCount, MonthlyActivity, PopularExercise,
        TimeSlotLoad, TrainerLoad, TrainerRating,
    },
    error::Result,
    repository::analytics::AnalyticsRepository,
};

/// The heatmap only covers the last month of workouts.
pub const HEATMAP_WINDOW_DAYS: u64 = 30;

/// Every chart on the analytics page, loaded in one go
#[derive(Debug, Clone)]
pub struct AnalyticsOverview {
    pub memberships: Vec<MembershipCount>,
    pub trainer_ratings: Vec<TrainerRating>,
    pub monthly: Vec<MonthlyActivity>,
    pub popular_exercises: Vec<PopularExercise>,
    pub calories: Vec<ExerciseCalories>,
    pub trainer_load: Vec<TrainerLoad>,
    pub time_slots: Vec<TimeSlotLoad>,
    pub heatmap: ActivityHeatmap,
}

pub async fn membership_distribution(pool: &SqlitePool) -> Result<Vec<MembershipCount>> {
    AnalyticsRepository::new(pool).membership_distribution().await
}

pub async fn trainer_ratings(pool: &SqlitePool) -> Result<Vec<TrainerRating>> {
    AnalyticsRepository::new(pool).trainer_ratings().await
}

pub async fn monthly_activity(pool: &SqlitePool) -> Result<Vec<MonthlyActivity>> {
    AnalyticsRepository::new(pool).monthly_activity().await
}

pub async fn popular_exercises(pool: &SqlitePool) -> Result<Vec<PopularExercise>> {
    AnalyticsRepository::new(pool).popular_exercises().await
}

pub async fn calories_by_exercise(pool: &SqlitePool) -> Result<Vec<ExerciseCalories>> {
    AnalyticsRepository::new(pool).calories_by_exercise().await
}

pub async fn trainer_load(pool: &SqlitePool) -> Result<Vec<TrainerLoad>> {
    AnalyticsRepository::new(pool).trainer_load().await
}

pub async fn time_slot_distribution(pool: &SqlitePool) -> Result<Vec<TimeSlotLoad>> {
    AnalyticsRepository::new(pool).time_slot_distribution().await
}

pub async fn activity_heatmap(pool: &SqlitePool, today: NaiveDate) -> Result<ActivityHeatmap> {
    let since = today
        .checked_sub_days(Days::new(HEATMAP_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    AnalyticsRepository::new(pool).activity_heatmap(since).await
}

pub async fn overview(pool: &SqlitePool, today: NaiveDate) -> Result<AnalyticsOverview> {
    let repo = AnalyticsRepository::new(pool);

    let overview = AnalyticsOverview {
        memberships: repo.membership_distribution().await?,
        trainer_ratings: repo.trainer_ratings().await?,
        monthly: repo.monthly_activity().await?,
        popular_exercises: repo.popular_exercises().await?,
        calories: repo.calories_by_exercise().await?,
        trainer_load: repo.trainer_load().await?,
        time_slots: repo.time_slot_distribution().await?,
        heatmap: activity_heatmap(pool, today).await?,
    };

    tracing::debug!(
        months = overview.monthly.len(),
        heatmap_total = overview.heatmap.total(),
        "Loaded analytics overview"
    );

    Ok(overview)
}
