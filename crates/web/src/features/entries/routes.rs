use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    get_athlete_history, get_entry, list_column_values, list_entries, list_entries_by_date_range,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_entries))
        .route("/:id", get(get_entry))
        .route("/column/:column_name", get(list_column_values))
        .route("/athlete/:athlete_name", get(get_athlete_history))
        .route("/date_range", get(list_entries_by_date_range))
        .route("/date_range/", get(list_entries_by_date_range))
}
