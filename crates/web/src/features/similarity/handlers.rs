use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        entry::EntryResponse,
        filters::{BodyweightQuery, PerformanceQuery},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/entries/bodyweight/",
    params(BodyweightQuery),
    responses(
        (status = 200, description = "Up to 100 lifters near the target bodyweight, strongest first", body = Vec<EntryResponse>)
    ),
    tag = "similarity"
)]
pub async fn list_by_bodyweight(
    State(db): State<Database>,
    Query(query): Query<BodyweightQuery>,
) -> Result<Response, WebError> {
    let entries = services::list_by_bodyweight(db.pool(), &query).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/performance/",
    params(PerformanceQuery),
    responses(
        (status = 200, description = "Lifters whose three best lifts fall inside the bands", body = Vec<EntryResponse>)
    ),
    tag = "similarity"
)]
pub async fn list_by_performance(
    State(db): State<Database>,
    Query(query): Query<PerformanceQuery>,
) -> Result<Response, WebError> {
    let entries = services::list_by_performance(db.pool(), &query).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}
