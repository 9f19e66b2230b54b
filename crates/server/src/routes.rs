pub mod cupcakes;
pub mod madlibs;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::repository::CupcakeRepository;

/// Shared handler state: the storage handle is injected here at startup so
/// tests can swap in an in-memory repository.
#[derive(Clone)]
pub struct ServerState {
    pub repo: Arc<dyn CupcakeRepository>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, cupcake API, mad-libs pages
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes (health + mad libs pages)
    let public = Router::new()
        .route("/health", get(health))
        .route("/home", get(madlibs::home))
        .route("/story", post(madlibs::show_story));

    // JSON API routes
    let api = Router::new()
        .route("/api/cupcakes", get(cupcakes::list).post(cupcakes::create))
        .route(
            "/api/cupcakes/:id",
            get(cupcakes::get).patch(cupcakes::update).delete(cupcakes::delete),
        );

    // Compose
    public
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
