use sqlx::PgPool;
use storage::{
    dto::filters::{BodyweightQuery, PerformanceQuery},
    error::Result,
    models::Entry,
    repository::entry::EntryRepository,
};

/// Lifters with a similar bodyweight
pub async fn list_by_bodyweight(pool: &PgPool, query: &BodyweightQuery) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.by_bodyweight(query).await
}

/// Lifters with similar best lifts
pub async fn list_by_performance(pool: &PgPool, query: &PerformanceQuery) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.by_performance(query).await
}
