use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        entry::{CompareResponse, EntryResponse},
        filters::RankingFilter,
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/entries/athlete_ranking/{athlete}/{year}/{equipment}/{federation}/{division}/{weight_class}",
    params(
        ("athlete" = String, Path, description = "Exact athlete name"),
        ("year" = i32, Path, description = "Competition year"),
        ("equipment" = String, Path, description = "Equipment category"),
        ("federation" = String, Path, description = "Federation"),
        ("division" = String, Path, description = "Division"),
        ("weight_class" = String, Path, description = "Weight class")
    ),
    responses(
        (status = 200, description = "Entries ranked within three places of the athlete", body = Vec<EntryResponse>),
        (status = 404, description = "Athlete has no ranked entry in that cohort")
    ),
    tag = "rankings"
)]
pub async fn get_athlete_ranking(
    State(db): State<Database>,
    Path((athlete, year, equipment, federation, division, weight_class)): Path<(
        String,
        i32,
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, WebError> {
    let filter = RankingFilter {
        athlete,
        year,
        equipment,
        federation,
        division,
        weight_class,
    };

    let entries = services::get_neighborhood(db.pool(), &filter).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/entries/compare/{entry_id}",
    params(
        ("entry_id" = i32, Path, description = "Entry id of the lifter to compare")
    ),
    responses(
        (status = 200, description = "Lifter plus everyone in the same weight class", body = CompareResponse),
        (status = 404, description = "Lifter not found")
    ),
    tag = "rankings"
)]
pub async fn compare_lifter(
    State(db): State<Database>,
    Path(entry_id): Path<i32>,
) -> Result<Response, WebError> {
    let (lifter, competitors) = services::compare_lifter(db.pool(), entry_id).await?;

    let response = CompareResponse {
        lifter: EntryResponse::from(lifter),
        competitors: competitors.into_iter().map(EntryResponse::from).collect(),
    };

    Ok(Json(response).into_response())
}
