//! Club HTTP adapter: directory, management, and admin review.

mod dto;
mod handlers;
mod routes;

pub use routes::club_routes;
