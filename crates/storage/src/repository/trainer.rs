use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::trainer::CreateTrainerRequest;
use crate::error::{Result, StorageError};
use crate::models::{Status, Trainer};

const TRAINER_COLUMNS: &str = "id, name, specialty, experience_years, rating, status";

pub struct TrainerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, status: Option<Status>) -> Result<Vec<Trainer>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TRAINER_COLUMNS} FROM trainers WHERE 1=1"));

        if let Some(status) = status {
            query.push(" AND status = ");
            query.push_bind(status);
        }

        query.push(" ORDER BY id");

        let trainers = query
            .build_query_as::<Trainer>()
            .fetch_all(self.pool)
            .await?;

        Ok(trainers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Trainer> {
        let trainer = sqlx::query_as::<_, Trainer>(&format!(
            "SELECT {TRAINER_COLUMNS} FROM trainers WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(trainer)
    }

    pub async fn create(&self, req: &CreateTrainerRequest) -> Result<Trainer> {
        let trainer = sqlx::query_as::<_, Trainer>(&format!(
            r#"
            INSERT INTO trainers (name, specialty, experience_years, rating)
            VALUES (?, ?, ?, ?)
            RETURNING {TRAINER_COLUMNS}
            "#
        ))
        .bind(req.name.trim())
        .bind(req.specialty.trim())
        .bind(req.experience_years)
        .bind(req.rating)
        .fetch_one(self.pool)
        .await?;

        Ok(trainer)
    }

    /// Soft delete, classes already taught keep pointing at the trainer
    pub async fn deactivate(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE trainers SET status = ? WHERE id = ?")
            .bind(Status::Inactive)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count_active(&self) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trainers WHERE status = ?")
                .bind(Status::Active)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }
}
