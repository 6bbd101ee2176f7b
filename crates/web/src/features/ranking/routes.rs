use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{compare_lifter, get_athlete_ranking};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/athlete_ranking/:athlete/:year/:equipment/:federation/:division/:weight_class",
            get(get_athlete_ranking),
        )
        .route("/compare/:entry_id", get(compare_lifter))
}
