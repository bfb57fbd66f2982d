//! Summary HTTP adapter: role-scoped dashboard numbers.

mod dto;
mod handlers;
mod routes;

pub use routes::summary_routes;
