//! Club repository port.
//!
//! Defines the contract for persisting and querying Club aggregates,
//! covering both the manager write path and the public directory reads.
//!
//! # Design
//!
//! - **Search runs in the store**: filtering and ordering happen in SQL,
//!   not in memory, so the directory stays cheap as clubs grow
//! - **Approved-only reads**: the public listing methods never leak
//!   pending or rejected clubs

use crate::domain::club::{Club, ClubSearch};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use async_trait::async_trait;

/// Repository port for Club aggregate persistence and directory queries.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Save a new club.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, club: &Club) -> Result<(), DomainError>;

    /// Update an existing club.
    ///
    /// # Errors
    ///
    /// - `ClubNotFound` if the club doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, club: &Club) -> Result<(), DomainError>;

    /// Delete a club.
    ///
    /// # Errors
    ///
    /// - `ClubNotFound` if the club doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ClubId) -> Result<(), DomainError>;

    /// Find a club by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    /// List every club regardless of status, newest first.
    ///
    /// Admin review queue.
    async fn list_all(&self) -> Result<Vec<Club>, DomainError>;

    /// List approved clubs, newest first, optionally capped.
    async fn list_approved(&self, limit: Option<i64>) -> Result<Vec<Club>, DomainError>;

    /// List clubs managed by the given email, newest first.
    async fn list_by_manager(&self, manager_email: &EmailAddress)
        -> Result<Vec<Club>, DomainError>;

    /// Search approved clubs with the given filters and sort order.
    async fn search(&self, query: &ClubSearch) -> Result<Vec<Club>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn club_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ClubRepository) {}
    }
}
