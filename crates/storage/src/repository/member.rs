use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::member::CreateMemberRequest;
use crate::error::{Result, StorageError};
use crate::models::{Member, Status};

const MEMBER_COLUMNS: &str =
    "id, name, email, phone, membership_type, start_date, end_date, status";

pub struct MemberRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MemberRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List members, optionally restricted to one status
    pub async fn list(&self, status: Option<Status>) -> Result<Vec<Member>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {MEMBER_COLUMNS} FROM members WHERE 1=1"));

        if let Some(status) = status {
            query.push(" AND status = ");
            query.push_bind(status);
        }

        query.push(" ORDER BY id");

        let members = query.build_query_as::<Member>().fetch_all(self.pool).await?;

        Ok(members)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    /// Register a new member; the end date follows from the plan tier
    pub async fn create(&self, req: &CreateMemberRequest) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO members (name, email, phone, membership_type, start_date, end_date)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(req.name.trim())
        .bind(req.email.trim())
        .bind(req.normalized_phone())
        .bind(req.membership_type)
        .bind(req.start_date)
        .bind(req.end_date())
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::DuplicateEmail(req.email.trim().to_string())
            } else {
                e
            }
        })?;

        Ok(member)
    }

    /// Soft delete: the member row and its history stay in place
    pub async fn deactivate(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE members SET status = ? WHERE id = ?")
            .bind(Status::Inactive)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Active members whose membership ends on or before `until`, soonest first
    pub async fn list_expiring(&self, until: NaiveDate) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            r#"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE status = ? AND end_date <= ?
            ORDER BY end_date, id
            "#
        ))
        .bind(Status::Active)
        .bind(until)
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    pub async fn count_active(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members WHERE status = ?")
            .bind(Status::Active)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
