//! Event-registration HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use routes::registration_routes;
