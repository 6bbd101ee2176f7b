use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        entry::{ColumnValue, EntryResponse},
        filters::{DateRangeQuery, FilterColumn},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/entries/",
    responses(
        (status = 200, description = "List all entries", body = Vec<EntryResponse>)
    ),
    tag = "entries"
)]
pub async fn list_entries(State(db): State<Database>) -> Result<Response, WebError> {
    let entries = services::list_entries(db.pool()).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/{id}",
    params(
        ("id" = i32, Path, description = "Entry id")
    ),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let entry = services::get_entry(db.pool(), id).await?;

    Ok(Json(EntryResponse::from(entry)).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/column/{column_name}",
    params(
        ("column_name" = String, Path, description = "One of equipment, federation, division, weight_class")
    ),
    responses(
        (status = 200, description = "Distinct values for the column", body = Vec<ColumnValue>),
        (status = 400, description = "Column outside the allow-list")
    ),
    tag = "entries"
)]
pub async fn list_column_values(
    State(db): State<Database>,
    Path(column_name): Path<String>,
) -> Result<Response, WebError> {
    let column = FilterColumn::parse(&column_name).ok_or_else(|| {
        WebError::BadRequest(format!(
            "Invalid column name. Must be one of: {}",
            FilterColumn::ALLOWED.join(", ")
        ))
    })?;

    tracing::debug!("listing distinct {} values", column.as_column());

    let values = services::list_column_values(db.pool(), column).await?;

    let response: Vec<ColumnValue> = values
        .into_iter()
        .map(|value| ColumnValue { value })
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/athlete/{athlete_name}",
    params(
        ("athlete_name" = String, Path, description = "Exact athlete name")
    ),
    responses(
        (status = 200, description = "Competition history, oldest first", body = Vec<EntryResponse>),
        (status = 404, description = "No entries for that name")
    ),
    tag = "entries"
)]
pub async fn get_athlete_history(
    State(db): State<Database>,
    Path(athlete_name): Path<String>,
) -> Result<Response, WebError> {
    let entries = services::get_athlete_history(db.pool(), &athlete_name).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/date_range/",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Entries within the inclusive date range", body = Vec<EntryResponse>)
    ),
    tag = "entries"
)]
pub async fn list_entries_by_date_range(
    State(db): State<Database>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Response, WebError> {
    let entries = services::list_entries_by_date_range(db.pool(), &range).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}
