//! Event HTTP adapter: the public event board and manager tooling.

mod dto;
mod handlers;
mod routes;

pub use routes::event_routes;
