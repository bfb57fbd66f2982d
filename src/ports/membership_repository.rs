//! Membership repository port.
//!
//! Defines the contract for persisting and retrieving Membership
//! aggregates. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Storage-enforced uniqueness**: `insert` relies on a partial unique
//!   index over live memberships; a second live join for the same
//!   (club, member) pair must surface as `MembershipExists`, never as a
//!   second row
//! - **Joined views for lists**: member- and manager-facing lists carry
//!   the club name and fee so the HTTP layer never re-fetches clubs
//!
//! # Example
//!
//! ```ignore
//! async fn join_free_club(
//!     repo: &dyn MembershipRepository,
//!     club_id: ClubId,
//!     member: EmailAddress,
//! ) -> Result<Membership, DomainError> {
//!     let membership = Membership::create_active(MembershipId::new(), club_id, member);
//!     repo.insert(&membership).await?;
//!     Ok(membership)
//! }
//! ```

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, MembershipId};
use crate::domain::membership::{Membership, MembershipStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Repository port for Membership aggregate persistence.
///
/// Implementations must ensure:
/// - At most one live membership per (club, member) pair
/// - `MembershipExists` when an insert collides with a live membership
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Save a new membership.
    ///
    /// # Errors
    ///
    /// - `MembershipExists` if the member already holds a live membership
    ///   in this club
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Update an existing membership.
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if the membership doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Find a membership by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// Find the live membership for a member in a club.
    ///
    /// Returns `None` when the member holds no live membership there.
    async fn find_live(
        &self,
        club_id: &ClubId,
        member_email: &EmailAddress,
    ) -> Result<Option<Membership>, DomainError>;

    /// List the member's memberships across all clubs, newest first.
    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError>;

    /// List memberships across every club the given manager owns,
    /// newest first.
    async fn list_by_manager(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError>;
}

/// Membership joined with the club it belongs to, for list displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipWithClub {
    /// The membership itself.
    pub membership: Membership,

    /// Name of the club joined.
    pub club_name: String,

    /// Category of the club joined.
    pub club_category: String,

    /// Membership fee of the club in minor units.
    pub club_fee: i64,
}

impl MembershipWithClub {
    /// Convenience accessor for the membership status.
    pub fn status(&self) -> MembershipStatus {
        self.membership.status
    }
}
