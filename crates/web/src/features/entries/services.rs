use sqlx::PgPool;
use storage::{
    dto::filters::{DateRangeQuery, FilterColumn},
    error::Result,
    models::Entry,
    repository::entry::EntryRepository,
};

/// List every entry
pub async fn list_entries(pool: &PgPool) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.list().await
}

/// Get entry by id
pub async fn get_entry(pool: &PgPool, id: i32) -> Result<Entry> {
    let repo = EntryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Distinct values of one allowed filter column
pub async fn list_column_values(pool: &PgPool, column: FilterColumn) -> Result<Vec<String>> {
    let repo = EntryRepository::new(pool);
    repo.column_values(column).await
}

/// An athlete's full competition history, oldest first
pub async fn get_athlete_history(pool: &PgPool, name: &str) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.athlete_history(name).await
}

/// Entries inside an inclusive date range
pub async fn list_entries_by_date_range(
    pool: &PgPool,
    range: &DateRangeQuery,
) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.by_date_range(range).await
}
