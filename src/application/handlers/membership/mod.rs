//! Membership handlers - joining clubs and managing the lifecycle.

mod expire_membership;
mod join_club;
mod membership_queries;

pub use expire_membership::{ExpireMembershipCommand, ExpireMembershipHandler};
pub use join_club::{JoinClubCommand, JoinClubHandler, JoinClubResult};
pub use membership_queries::MembershipQueries;
