// File: crates/bookly_scheduling/src/handlers.rs
use crate::auth::PasscodeAuthProvider;
use crate::logic::{
    AvailabilityQuery, AvailabilityResponse, BookSlotRequest, BookingResponse, LoginRequest,
    LoginResponse, SchedulingService, SetOverridesRequest, SetOverridesResponse,
};
use crate::store::{InMemoryBookingStore, InMemoryOverrideStore};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Json, Response},
};
use bookly_common::services::SharedAuthProvider;
use bookly_common::{handle_json_result, BookingsByDate, BooklyError, OverridesByDate};
use bookly_config::AppConfig;
use std::sync::Arc;
use tracing::debug;
#[cfg(feature = "openapi")]
use {bookly_common::BookingRecord, std::collections::BTreeMap};

// Shared state needed by the scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub service: Arc<SchedulingService>,
    pub auth: SharedAuthProvider,
}

impl SchedulingState {
    pub fn new(service: Arc<SchedulingService>, auth: SharedAuthProvider) -> Self {
        Self { service, auth }
    }

    /// Empty in-memory stores and the configured admin passcode.
    pub fn in_memory(config: &AppConfig) -> Result<Self, BooklyError> {
        let passcode = config.admin_passcode().ok_or_else(|| {
            BooklyError::InternalError("admin passcode is not configured".to_string())
        })?;
        let service = SchedulingService::new(
            config.scheduling.slot_policy,
            Arc::new(InMemoryBookingStore::new()),
            Arc::new(InMemoryOverrideStore::new()),
        );
        Ok(Self::new(
            Arc::new(service),
            Arc::new(PasscodeAuthProvider::new(passcode)),
        ))
    }
}

/// Handler to get the open slots for a single day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Open slots for the date", body = AvailabilityResponse),
        (status = 400, description = "Missing or malformed date")
    ),
    tag = "Booking"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, BooklyError> {
    let Query(query) = query?;
    let response = state.service.availability_for(query.date.as_deref())?;
    debug!(
        "{} open slot(s) on {}",
        response.available_times.len(),
        response.date
    );
    Ok(Json(response))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book",
    request_body = BookSlotRequest,
    responses(
        (status = 201, description = "Slot booked", body = BookingResponse),
        (status = 400, description = "Missing required field or malformed date"),
        (status = 409, description = "Slot already booked, disabled or not offered")
    ),
    tag = "Booking"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<SchedulingState>>,
    payload: Result<Json<BookSlotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), BooklyError> {
    let Json(request) = payload?;
    let response = state.service.create_booking(request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Passcode accepted", body = LoginResponse),
        (status = 401, description = "Wrong passcode")
    ),
    tag = "Admin"
))]
pub async fn admin_login_handler(
    State(state): State<Arc<SchedulingState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BooklyError> {
    let Json(request) = payload?;
    let passcode = request.passcode.unwrap_or_default();
    let token = state.auth.issue_token(&passcode)?;
    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/bookings",
    responses(
        (status = 200, description = "All bookings keyed by date", body = BTreeMap<String, Vec<BookingRecord>>),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Unknown token")
    ),
    security(("bearer" = [])),
    tag = "Admin"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<SchedulingState>>,
) -> Result<Json<BookingsByDate>, Response> {
    handle_json_result(state.service.list_bookings())
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/availability",
    responses(
        (status = 200, description = "All slot overrides keyed by date", body = BTreeMap<String, BTreeMap<String, bool>>),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Unknown token")
    ),
    security(("bearer" = [])),
    tag = "Admin"
))]
pub async fn list_overrides_handler(
    State(state): State<Arc<SchedulingState>>,
) -> Result<Json<OverridesByDate>, Response> {
    handle_json_result(state.service.list_overrides())
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/availability",
    request_body = SetOverridesRequest,
    responses(
        (status = 200, description = "Overrides merged", body = SetOverridesResponse),
        (status = 400, description = "Missing date or slots"),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Unknown token")
    ),
    security(("bearer" = [])),
    tag = "Admin"
))]
pub async fn set_overrides_handler(
    State(state): State<Arc<SchedulingState>>,
    payload: Result<Json<SetOverridesRequest>, JsonRejection>,
) -> Result<Json<SetOverridesResponse>, BooklyError> {
    let Json(request) = payload?;
    Ok(Json(state.service.set_overrides(request)?))
}
