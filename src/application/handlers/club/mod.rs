//! Club handlers - creation, edits, admin review, and directory reads.

mod club_queries;
mod create_club;
mod delete_club;
mod review_club;
mod update_club;

pub use club_queries::ClubQueries;
pub use create_club::{CreateClubCommand, CreateClubHandler};
pub use delete_club::{DeleteClubCommand, DeleteClubHandler};
pub use review_club::{ReviewClubCommand, ReviewClubHandler, ReviewDecision};
pub use update_club::{UpdateClubCommand, UpdateClubHandler};
