// File: crates/bookly_scheduling/src/doc.rs

#![cfg(feature = "openapi")]
use bookly_common::BookingRecord;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::logic::{
    AvailabilityQuery, AvailabilityResponse, BookSlotRequest, BookingResponse, LoginRequest,
    LoginResponse, SetOverridesRequest, SetOverridesResponse,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_availability_handler,
        crate::handlers::book_slot_handler,
        crate::handlers::admin_login_handler,
        crate::handlers::list_bookings_handler,
        crate::handlers::list_overrides_handler,
        crate::handlers::set_overrides_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            BookSlotRequest,
            BookingResponse,
            BookingRecord,
            LoginRequest,
            LoginResponse,
            SetOverridesRequest,
            SetOverridesResponse
        )
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "Booking", description = "Public availability and booking API"),
        (name = "Admin", description = "Passcode login, bookings and slot overrides")
    ),
    servers(
        (url = "/api", description = "Bookly API server")
    )
)]
pub struct SchedulingApiDoc;
