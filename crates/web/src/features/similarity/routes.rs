use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{list_by_bodyweight, list_by_performance};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/bodyweight", get(list_by_bodyweight))
        .route("/bodyweight/", get(list_by_bodyweight))
        .route("/performance", get(list_by_performance))
        .route("/performance/", get(list_by_performance))
}
