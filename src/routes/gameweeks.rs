use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use crate::error::ApiError;
use crate::fpl::FplClient;
use crate::models::Gameweek;

pub fn router(client: FplClient) -> Router {
    Router::new()
        .route("/", get(get_gameweeks))
        .route("/current", get(get_current_gameweek))
        .route("/{id}", get(get_gameweek_by_id))
        .with_state(client)
}

/// GET /gameweeks - All gameweeks of the season, in upstream order
pub async fn get_gameweeks(
    State(client): State<FplClient>,
) -> Result<Json<Vec<Gameweek>>, ApiError> {
    let gameweeks = client.bootstrap().await?.gameweeks();

    Ok(Json(gameweeks))
}

/// GET /gameweeks/current - The gameweek currently in play
///
/// Pre-season there is no current gameweek and this answers 404.
pub async fn get_current_gameweek(
    State(client): State<FplClient>,
) -> Result<Json<Gameweek>, ApiError> {
    let gameweek = client
        .bootstrap()
        .await?
        .events
        .iter()
        .find(|e| e.is_current)
        .map(|e| e.to_gameweek())
        .ok_or(ApiError::NotFound)?;

    Ok(Json(gameweek))
}

/// GET /gameweeks/{id} - Get gameweek by ID
pub async fn get_gameweek_by_id(
    State(client): State<FplClient>,
    Path(gameweek_id): Path<i64>,
) -> Result<Json<Gameweek>, ApiError> {
    let gameweek = client
        .bootstrap()
        .await?
        .events
        .iter()
        .find(|e| e.id == gameweek_id)
        .map(|e| e.to_gameweek())
        .ok_or(ApiError::NotFound)?;

    Ok(Json(gameweek))
}
