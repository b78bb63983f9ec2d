use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use crate::error::ApiError;
use crate::fpl::FplClient;
use crate::models::Footballer;

// Query parameters for listing footballers
#[derive(Deserialize)]
pub struct ListFootballersQuery {
    /// Team short name, e.g. "ARS"
    #[serde(default)]
    team: Option<String>,
}

pub fn router(client: FplClient) -> Router {
    Router::new()
        .route("/", get(get_footballers))
        .route("/{id}", get(get_footballer_by_id))
        .with_state(client)
}

/// GET /footballers - List all footballers, optionally filtered by team
pub async fn get_footballers(
    State(client): State<FplClient>,
    Query(params): Query<ListFootballersQuery>,
) -> Result<Json<Vec<Footballer>>, ApiError> {
    let mut footballers = client.bootstrap().await?.footballers();

    if let Some(team) = &params.team {
        footballers.retain(|f| {
            f.team
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(team))
        });
    }

    Ok(Json(footballers))
}

/// GET /footballers/{id} - Get footballer by ID
pub async fn get_footballer_by_id(
    State(client): State<FplClient>,
    Path(footballer_id): Path<i64>,
) -> Result<Json<Footballer>, ApiError> {
    let bootstrap = client.bootstrap().await?;

    let footballer = bootstrap
        .elements
        .iter()
        .find(|e| e.id == footballer_id)
        .map(|e| e.to_footballer(&bootstrap.teams))
        .ok_or(ApiError::NotFound)?;

    Ok(Json(footballer))
}
