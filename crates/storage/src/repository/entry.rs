use sqlx::PgPool;

use crate::dto::filters::{BodyweightQuery, DateRangeQuery, FilterColumn, PerformanceQuery};
use crate::error::{Result, StorageError};
use crate::models::Entry;

/// Shared projection over `entries`. Numeric columns are cast to
/// `float8` so a `numeric` column decodes the same as `double
/// precision`, and stored NaN/Infinity markers are dropped to NULL
/// inside the statement.
const ENTRY_COLUMNS: &str = r#"
    id, name, sex, event, equipment,
    CASE WHEN age = 'NaN'::float8 OR age = 'Infinity'::float8 OR age = '-Infinity'::float8
         THEN NULL ELSE age::float8 END AS age,
    division,
    CASE WHEN bodyweight = 'NaN'::float8 OR bodyweight = 'Infinity'::float8 OR bodyweight = '-Infinity'::float8
         THEN NULL ELSE bodyweight::float8 END AS bodyweight,
    weight_class,
    CASE WHEN best_squat = 'NaN'::float8 OR best_squat = 'Infinity'::float8 OR best_squat = '-Infinity'::float8
         THEN NULL ELSE best_squat::float8 END AS best_squat,
    CASE WHEN best_bench = 'NaN'::float8 OR best_bench = 'Infinity'::float8 OR best_bench = '-Infinity'::float8
         THEN NULL ELSE best_bench::float8 END AS best_bench,
    CASE WHEN best_deadlift = 'NaN'::float8 OR best_deadlift = 'Infinity'::float8 OR best_deadlift = '-Infinity'::float8
         THEN NULL ELSE best_deadlift::float8 END AS best_deadlift,
    CASE WHEN total = 'NaN'::float8 OR total = 'Infinity'::float8 OR total = '-Infinity'::float8
         THEN NULL ELSE total::float8 END AS total,
    place, date, meet_name, federation,
    CASE WHEN dots = 'NaN'::float8 OR dots = 'Infinity'::float8 OR dots = '-Infinity'::float8
         THEN NULL ELSE dots::float8 END AS dots
"#;

// One complete statement per allowed column; identifiers never come
// from caller input.
const EQUIPMENT_VALUES_SQL: &str = "SELECT DISTINCT equipment FROM entries \
     WHERE equipment IS NOT NULL AND equipment != '' AND equipment != 'NaN' \
     ORDER BY equipment";
const FEDERATION_VALUES_SQL: &str = "SELECT DISTINCT federation FROM entries \
     WHERE federation IS NOT NULL AND federation != '' AND federation != 'NaN' \
     ORDER BY federation";
const DIVISION_VALUES_SQL: &str = "SELECT DISTINCT division FROM entries \
     WHERE division IS NOT NULL AND division != '' AND division != 'NaN' \
     ORDER BY division";
const WEIGHT_CLASS_VALUES_SQL: &str = "SELECT DISTINCT weight_class FROM entries \
     WHERE weight_class IS NOT NULL AND weight_class != '' AND weight_class != 'NaN' \
     ORDER BY weight_class";

pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every entry in store order. No limit, no pagination.
    pub async fn list(&self) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!("SELECT {ENTRY_COLUMNS} FROM entries"))
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }

    /// Find one entry by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Entry> {
        let entry =
            sqlx::query_as::<_, Entry>(&format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Distinct non-null, non-empty, non-'NaN' values of one allowed
    /// column, sorted ascending.
    pub async fn column_values(&self, column: FilterColumn) -> Result<Vec<String>> {
        let sql = match column {
            FilterColumn::Equipment => EQUIPMENT_VALUES_SQL,
            FilterColumn::Federation => FEDERATION_VALUES_SQL,
            FilterColumn::Division => DIVISION_VALUES_SQL,
            FilterColumn::WeightClass => WEIGHT_CLASS_VALUES_SQL,
        };

        let values = sqlx::query_scalar::<_, String>(sql)
            .fetch_all(self.pool)
            .await?;

        Ok(values)
    }

    /// All entries recorded under an exact athlete name, oldest meet
    /// first. No rows at all is a lookup failure.
    pub async fn athlete_history(&self, name: &str) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE name = $1 ORDER BY date ASC"
        ))
        .bind(name)
        .fetch_all(self.pool)
        .await?;

        if entries.is_empty() {
            return Err(StorageError::NotFound);
        }

        Ok(entries)
    }

    /// Entries whose meet date falls in the inclusive range.
    pub async fn by_date_range(&self, range: &DateRangeQuery) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE date BETWEEN $1 AND $2"
        ))
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Lifters whose bodyweight falls within the band, strongest totals
    /// first, capped at 100 rows.
    pub async fn by_bodyweight(&self, query: &BodyweightQuery) -> Result<Vec<Entry>> {
        let (low, high) = query.band();

        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE bodyweight BETWEEN $1 AND $2 \
             ORDER BY total DESC \
             LIMIT 100"
        ))
        .bind(low)
        .bind(high)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Lifters whose three best lifts each fall within their band.
    pub async fn by_performance(&self, query: &PerformanceQuery) -> Result<Vec<Entry>> {
        let (squat_low, squat_high) = query.squat_band();
        let (bench_low, bench_high) = query.bench_band();
        let (deadlift_low, deadlift_high) = query.deadlift_band();

        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE best_squat BETWEEN $1 AND $2 \
             AND best_bench BETWEEN $3 AND $4 \
             AND best_deadlift BETWEEN $5 AND $6"
        ))
        .bind(squat_low)
        .bind(squat_high)
        .bind(bench_low)
        .bind(bench_high)
        .bind(deadlift_low)
        .bind(deadlift_high)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// The target entry plus every entry sharing its weight class,
    /// target row included. Two sequential statements; a missing target
    /// fails before the competitor scan runs.
    pub async fn compare(&self, id: i32) -> Result<(Entry, Vec<Entry>)> {
        let lifter = self.find_by_id(id).await?;

        let competitors = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE weight_class = $1"
        ))
        .bind(lifter.weight_class.as_deref())
        .fetch_all(self.pool)
        .await?;

        Ok((lifter, competitors))
    }
}
