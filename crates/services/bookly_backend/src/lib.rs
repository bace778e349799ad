// File: services/bookly_backend/src/lib.rs
pub mod app_state;

use app_state::AppState;
use axum::{routing::get, Json, Router};
use bookly_config::ServerConfig;
use http::{header, HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

async fn welcome() -> &'static str {
    "Welcome to Bookly API!"
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any origin unless the server config lists specific ones.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if server.cors_allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Mounts every router under `/api` and adds the HTTP layers.
pub fn build_app(state: AppState) -> Router {
    info!(
        "Mounting API under /api (slot policy: {:?})",
        state.config.scheduling.slot_policy
    );
    let api_router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .merge(bookly_scheduling::routes(state.scheduling.clone()));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use bookly_scheduling::doc::SchedulingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Bookly API",
                version = "0.1.0",
                description = "Appointment booking service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SchedulingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(cors_layer(&state.config.server))
        .layer(TraceLayer::new_for_http())
}
