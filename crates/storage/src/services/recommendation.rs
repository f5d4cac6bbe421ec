use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;

use crate::dto::workout::{ExerciseStat, WorkoutRecommendation};
use crate::error::Result;
use crate::repository::member::MemberRepository;
use crate::repository::workout::WorkoutRepository;

/// History window the heuristic looks at.
pub const WINDOW_DAYS: u64 = 30;
/// Number of exercises suggested for members with history.
pub const MAX_SUGGESTIONS: usize = 3;
/// Weight increase applied to the recent average.
pub const PROGRESSION_FACTOR: f64 = 1.05;

const PROGRESSION_SETS: u32 = 3;
const PROGRESSION_REPS: (u32, u32) = (8, 10);

/// Starter plan for members with no recent workouts.
pub fn beginner_plan() -> Vec<WorkoutRecommendation> {
    [
        ("Squat", "3 sets of 10 reps"),
        ("Push-up", "3 sets of 8 reps"),
        ("Treadmill", "20 minutes"),
    ]
    .into_iter()
    .map(|(exercise_name, prescription)| WorkoutRecommendation::Beginner {
        exercise_name: exercise_name.to_string(),
        prescription: prescription.to_string(),
    })
    .collect()
}

/// Next working weight: 5% over the recent average, rounded down to whole kg.
pub fn progressed_weight(avg_weight: Option<f64>) -> i64 {
    let avg = avg_weight.filter(|w| w.is_finite() && *w > 0.0).unwrap_or(0.0);
    (avg * PROGRESSION_FACTOR).floor() as i64
}

/// Build recommendations from per-exercise stats ordered most frequent first.
pub fn recommend(stats: &[ExerciseStat]) -> Vec<WorkoutRecommendation> {
    if stats.is_empty() {
        return beginner_plan();
    }

    stats
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|stat| WorkoutRecommendation::Progression {
            exercise_name: stat.exercise_name.clone(),
            weight_kg: progressed_weight(stat.avg_weight),
            sets: PROGRESSION_SETS,
            reps_min: PROGRESSION_REPS.0,
            reps_max: PROGRESSION_REPS.1,
        })
        .collect()
}

/// First day of the history window ending on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

pub async fn recommend_for_member(
    pool: &SqlitePool,
    member_id: i64,
    today: NaiveDate,
) -> Result<Vec<WorkoutRecommendation>> {
    MemberRepository::new(pool).find_by_id(member_id).await?;

    let stats = WorkoutRepository::new(pool)
        .exercise_stats_since(member_id, window_start(today))
        .await?;

    tracing::debug!(member_id, exercises = stats.len(), "Computing workout plan");

    Ok(recommend(&stats))
}
