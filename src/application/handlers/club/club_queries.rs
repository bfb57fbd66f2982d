//! Query handlers for the club directory.

use std::sync::Arc;

use crate::domain::club::{Club, ClubSearch};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode};
use crate::ports::ClubRepository;

/// How many clubs the featured strip shows.
const FEATURED_LIMIT: i64 = 6;

/// Read-side handler for club lookups and directory listings.
pub struct ClubQueries {
    clubs: Arc<dyn ClubRepository>,
}

impl ClubQueries {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    /// One club by id.
    pub async fn get(&self, id: &ClubId) -> Result<Club, DomainError> {
        self.clubs.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::ClubNotFound, format!("Club not found: {}", id))
        })
    }

    /// Every club regardless of status. Admin review queue.
    pub async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
        self.clubs.list_all().await
    }

    /// Approved clubs, newest first.
    pub async fn list_approved(&self) -> Result<Vec<Club>, DomainError> {
        self.clubs.list_approved(None).await
    }

    /// The featured strip: first few approved clubs.
    pub async fn list_featured(&self) -> Result<Vec<Club>, DomainError> {
        self.clubs.list_approved(Some(FEATURED_LIMIT)).await
    }

    /// Clubs the manager owns, newest first.
    pub async fn list_mine(&self, manager_email: &EmailAddress) -> Result<Vec<Club>, DomainError> {
        self.clubs.list_by_manager(manager_email).await
    }

    /// Directory search over approved clubs.
    pub async fn search(&self, query: &ClubSearch) -> Result<Vec<Club>, DomainError> {
        self.clubs.search(query).await
    }
}
