use sqlx::SqlitePool;
use storage::{
    dto::workout::{CreateWorkoutRequest, WorkoutRecordDetail},
    error::Result,
    models::WorkoutRecord,
    repository::workout::WorkoutRepository,
};

pub async fn list_workouts(pool: &SqlitePool) -> Result<Vec<WorkoutRecordDetail>> {
    let repo = WorkoutRepository::new(pool);
    repo.list_detailed().await
}

pub async fn log_workout(pool: &SqlitePool, request: &CreateWorkoutRequest) -> Result<WorkoutRecord> {
    let repo = WorkoutRepository::new(pool);
    let record = repo.create(request).await?;
    tracing::info!(
        workout_id = record.id,
        member_id = record.member_id,
        exercise = %record.exercise_name,
        "Workout logged"
    );
    Ok(record)
}

pub async fn delete_workout(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(id).await?;
    tracing::info!(workout_id = id, "Workout deleted");
    Ok(())
}
