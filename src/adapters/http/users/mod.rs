//! User HTTP adapter: sign-in upsert, profiles, and role administration.

mod dto;
mod handlers;
mod routes;

pub use routes::user_routes;
