//! User handlers - sign-in upsert, role assignment, and lookups.

mod set_user_role;
mod sign_in;
mod user_queries;

pub use set_user_role::{SetUserRoleCommand, SetUserRoleHandler};
pub use sign_in::{SignInCommand, SignInHandler, SignInResult};
pub use user_queries::UserQueries;
