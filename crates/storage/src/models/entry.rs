use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One athlete's result in one competition event, as stored in the
/// `entries` table. The table is populated by an external ingestion
/// process; every field except the primary key may be missing, and the
/// numeric columns may carry NaN or Infinity markers from upstream.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entry {
    pub id: i32,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub event: Option<String>,
    pub equipment: Option<String>,
    pub age: Option<f64>,
    pub division: Option<String>,
    pub bodyweight: Option<f64>,
    pub weight_class: Option<String>,
    pub best_squat: Option<f64>,
    pub best_bench: Option<f64>,
    pub best_deadlift: Option<f64>,
    pub total: Option<f64>,
    pub place: Option<String>,
    pub date: Option<NaiveDate>,
    pub meet_name: Option<String>,
    /// Cohort rank, produced only by the ranking window query. Not a
    /// column of the base table, so plain selects leave it unset.
    #[sqlx(default)]
    pub ranking: Option<i64>,
    pub federation: Option<String>,
    pub dots: Option<f64>,
}
