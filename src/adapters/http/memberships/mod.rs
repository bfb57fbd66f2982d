//! Membership HTTP adapter: the join-a-club lifecycle.

mod dto;
mod handlers;
mod routes;

pub use dto::MembershipResponse;
pub use routes::membership_routes;
