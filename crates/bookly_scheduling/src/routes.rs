// --- File: crates/bookly_scheduling/src/routes.rs ---

use crate::auth::admin_auth_middleware;
use crate::handlers::{
    admin_login_handler, book_slot_handler, get_availability_handler, list_bookings_handler,
    list_overrides_handler, set_overrides_handler, SchedulingState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router with the public booking routes and the token-guarded
/// admin routes. Paths are relative; the backend nests them under `/api`.
pub fn routes(state: Arc<SchedulingState>) -> Router {
    let admin_router = Router::new()
        .route("/admin/bookings", get(list_bookings_handler))
        .route(
            "/admin/availability",
            get(list_overrides_handler).post(set_overrides_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/book", post(book_slot_handler))
        .route("/admin/login", post(admin_login_handler))
        .merge(admin_router)
        .with_state(state)
}
