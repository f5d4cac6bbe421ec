use chrono::NaiveDate;
use sqlx::SqlitePool;
use storage::{
    dto::{
        member::{CreateMemberRequest, ExpiringMember},
        workout::{MemberActivity, WorkoutRecommendation},
    },
    error::Result,
    models::{Member, Status, WorkoutRecord},
    repository::{member::MemberRepository, workout::WorkoutRepository},
    services::{membership, recommendation},
};

pub async fn list_members(pool: &SqlitePool, status: Option<Status>) -> Result<Vec<Member>> {
    let repo = MemberRepository::new(pool);
    repo.list(status).await
}

pub async fn get_member(pool: &SqlitePool, id: i64) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn register_member(pool: &SqlitePool, request: &CreateMemberRequest) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    let member = repo.create(request).await?;

    tracing::info!(
        member_id = member.id,
        membership = %member.membership_type,
        end_date = %member.end_date,
        "Member registered"
    );

    Ok(member)
}

pub async fn deactivate_member(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = MemberRepository::new(pool);
    repo.deactivate(id).await?;
    tracing::info!(member_id = id, "Member deactivated");
    Ok(())
}

pub async fn expiring_members(pool: &SqlitePool, today: NaiveDate) -> Result<Vec<ExpiringMember>> {
    membership::expiring_members(pool, today).await
}

/// Workout history of an existing member, newest first
pub async fn member_workouts(pool: &SqlitePool, id: i64) -> Result<Vec<WorkoutRecord>> {
    MemberRepository::new(pool).find_by_id(id).await?;
    WorkoutRepository::new(pool).list_for_member(id).await
}

pub async fn member_activity(pool: &SqlitePool, id: i64) -> Result<MemberActivity> {
    MemberRepository::new(pool).find_by_id(id).await?;

    let repo = WorkoutRepository::new(pool);
    Ok(MemberActivity {
        workouts: repo.list_for_member(id).await?,
        daily_calories: repo.daily_calories(id).await?,
        exercise_frequency: repo.exercise_frequency(id).await?,
    })
}

pub async fn recommendations(
    pool: &SqlitePool,
    id: i64,
    today: NaiveDate,
) -> Result<Vec<WorkoutRecommendation>> {
    recommendation::recommend_for_member(pool, id, today).await
}
