//! Payment HTTP adapter: checkout, confirmation, and webhooks.

mod dto;
mod handlers;
mod routes;

pub use routes::{payment_routes, webhook_routes};
