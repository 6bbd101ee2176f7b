use sqlx::PgPool;

use crate::dto::filters::RankingFilter;
use crate::error::{Result, StorageError};
use crate::models::Entry;

/// Season-cohort window query. Rows with a positive total are ranked by
/// total descending within {federation, sex, weight_class, division,
/// equipment, year}; the outer join picks every row whose rank lands
/// within ±3 of one of the target athlete's ranks. The join is rank
/// only: the partition carries sex, but the window is not re-filtered
/// by it, matching the service's historical behavior.
const NEIGHBORHOOD_SQL: &str = r#"
    WITH ranked AS (
        SELECT
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
                 THEN 0 ELSE total::float8 END AS total,
            place, date, meet_name, federation,
            CASE WHEN dots = 'NaN'::float8 OR dots = 'Infinity'::float8 OR dots = '-Infinity'::float8
                 THEN NULL ELSE dots::float8 END AS dots,
            RANK() OVER (
                PARTITION BY federation, sex, weight_class, division, equipment, DATE_TRUNC('year', date)
                ORDER BY total DESC NULLS LAST
            ) AS ranking
        FROM entries
        WHERE DATE_TRUNC('year', date) = make_date($2, 1, 1)
        AND weight_class = $6
        AND division = $5
        AND federation = $4
        AND equipment = $3
        AND total > 0
    )
    SELECT r.*
    FROM ranked r
    JOIN (
        SELECT ranking
        FROM ranked
        WHERE name = $1
    ) target ON r.ranking BETWEEN target.ranking - 3 AND target.ranking + 3
    ORDER BY r.ranking
"#;

pub struct RankingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RankingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Entries ranked within ±3 places of the target athlete in the
    /// requested cohort, ascending by rank. An athlete with no ranked
    /// row there (wrong year, wrong federation, total <= 0) is a
    /// lookup failure.
    pub async fn neighborhood(&self, filter: &RankingFilter) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(NEIGHBORHOOD_SQL)
            .bind(&filter.athlete)
            .bind(filter.year)
            .bind(&filter.equipment)
            .bind(&filter.federation)
            .bind(&filter.division)
            .bind(&filter.weight_class)
            .fetch_all(self.pool)
            .await?;

        if entries.is_empty() {
            return Err(StorageError::NotFound);
        }

        Ok(entries)
    }
}
