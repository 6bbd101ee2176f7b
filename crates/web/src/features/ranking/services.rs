use sqlx::PgPool;
use storage::{
    dto::filters::RankingFilter,
    error::Result,
    models::Entry,
    repository::{entry::EntryRepository, ranking::RankingRepository},
};

/// Entries ranked within three places of the athlete in one cohort
pub async fn get_neighborhood(pool: &PgPool, filter: &RankingFilter) -> Result<Vec<Entry>> {
    let repo = RankingRepository::new(pool);
    repo.neighborhood(filter).await
}

/// A lifter plus every entry in the same weight class
pub async fn compare_lifter(pool: &PgPool, id: i32) -> Result<(Entry, Vec<Entry>)> {
    let repo = EntryRepository::new(pool);
    repo.compare(id).await
}
