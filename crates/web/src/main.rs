use anyhow::Context;
use axum::{Json, Router, routing::get};
use serde_json::json;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::entries::handlers::list_entries,
        features::entries::handlers::get_entry,
        features::entries::handlers::list_column_values,
        features::entries::handlers::get_athlete_history,
        features::entries::handlers::list_entries_by_date_range,
        features::ranking::handlers::get_athlete_ranking,
        features::ranking::handlers::compare_lifter,
        features::similarity::handlers::list_by_bodyweight,
        features::similarity::handlers::list_by_performance,
    ),
    components(
        schemas(
            storage::dto::entry::EntryResponse,
            storage::dto::entry::ColumnValue,
            storage::dto::entry::CompareResponse,
        )
    ),
    tags(
        (name = "entries", description = "Read-only competition entry endpoints"),
        (name = "rankings", description = "Cohort ranking and comparison endpoints"),
        (name = "similarity", description = "Bodyweight and performance similarity endpoints"),
    )
)]
struct ApiDoc;

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the API!" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting powerlifting entries API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database.host);
    let db = Database::connect(&config.database)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let entry_routes = features::entries::routes()
        .merge(features::ranking::routes())
        .merge(features::similarity::routes());

    let app = Router::new()
        .route("/", get(welcome))
        .nest("/entries", entry_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
