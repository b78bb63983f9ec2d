use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod fpl;
pub mod models;
pub mod routes;

use error::ApiError;
use fpl::FplClient;
use routes::api::Collaborators;

/// Collaborator routers backed by the FPL client.
pub fn collaborators(client: FplClient) -> Collaborators {
    Collaborators {
        footballers: routes::footballers::router(client.clone()),
        gameweeks: routes::gameweeks::router(client),
    }
}

/// The host application: the mounted API router, the health endpoint and the
/// not-found fallback for everything the API router leaves unhandled.
pub fn app(api: Router) -> Router {
    // CORS configuration for the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(api)
        // Wrong method on a known path is still "not ours": same answer as an unknown path
        .method_not_allowed_fallback(|| async { ApiError::NotFound })
        .fallback(|| async { ApiError::NotFound })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
