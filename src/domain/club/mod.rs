//! Club domain module.
//!
//! Handles club creation, admin review, and directory search.
//!
//! # Module Structure
//!
//! - `aggregate` - Club aggregate entity
//! - `search` - Directory search filters and sort orders
//! - `status` - ClubStatus state machine

mod aggregate;
mod search;
mod status;

pub use aggregate::{Club, ClubUpdate, MAX_FEE_MINOR};
pub use search::{ClubSearch, ClubSort};
pub use status::ClubStatus;
