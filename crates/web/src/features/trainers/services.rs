use sqlx::SqlitePool;
use storage::{
    dto::trainer::CreateTrainerRequest,
    error::Result,
    models::{Status, Trainer},
    repository::trainer::TrainerRepository,
};

pub async fn list_trainers(pool: &SqlitePool, status: Option<Status>) -> Result<Vec<Trainer>> {
    let repo = TrainerRepository::new(pool);
    repo.list(status).await
}

pub async fn get_trainer(pool: &SqlitePool, id: i64) -> Result<Trainer> {
    let repo = TrainerRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn register_trainer(pool: &SqlitePool, request: &CreateTrainerRequest) -> Result<Trainer> {
    let repo = TrainerRepository::new(pool);
    let trainer = repo.create(request).await?;
    tracing::info!(trainer_id = trainer.id, specialty = %trainer.specialty, "Trainer registered");
    Ok(trainer)
}

pub async fn deactivate_trainer(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = TrainerRepository::new(pool);
    repo.deactivate(id).await?;
    tracing::info!(trainer_id = id, "Trainer deactivated");
    Ok(())
}
