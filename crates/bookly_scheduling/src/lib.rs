// --- File: crates/bookly_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
pub mod slots;
pub mod store;

pub use handlers::SchedulingState;
pub use routes::routes;
