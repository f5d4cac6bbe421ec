use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;

use crate::dto::member::ExpiringMember;
use crate::error::Result;
use crate::repository::member::MemberRepository;

/// How far ahead the expiry warning looks.
pub const EXPIRY_WARNING_DAYS: u64 = 7;

/// Last end date that still triggers a warning on `today`.
pub fn warning_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(EXPIRY_WARNING_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Active members whose membership ends within the warning window (or has
/// already ended), soonest first.
pub async fn expiring_members(pool: &SqlitePool, today: NaiveDate) -> Result<Vec<ExpiringMember>> {
    let repo = MemberRepository::new(pool);
    let members = repo.list_expiring(warning_cutoff(today)).await?;

    tracing::debug!(count = members.len(), %today, "Loaded expiring memberships");

    Ok(members
        .into_iter()
        .map(|member| ExpiringMember::from_member(member, today))
        .collect())
}
