//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, healthz, root, AppState, HealthResponse, MessageResponse};

/// OpenAPI document for the service routes.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::healthz, handlers::root),
    components(schemas(HealthResponse, MessageResponse))
)]
struct ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    // The document title mirrors the application name, like a titled app object.
    let mut api_doc = ApiDoc::openapi();
    api_doc.info.title = state.settings.app_name.clone();

    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(root))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api_doc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
