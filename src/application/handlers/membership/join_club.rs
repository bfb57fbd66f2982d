//! JoinClubHandler - Command handler for a member joining a club.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{ClubId, EmailAddress, ErrorCode, MembershipId};
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{ClubRepository, MembershipRepository};

/// Command to join a club.
#[derive(Debug, Clone)]
pub struct JoinClubCommand {
    pub club_id: ClubId,
    pub member_email: EmailAddress,
}

/// Result of a successful join.
#[derive(Debug, Clone)]
pub struct JoinClubResult {
    pub membership: Membership,
    pub club: Club,
}

/// Handler for joining a club.
///
/// A free club activates the membership immediately. A paid club creates
/// the membership in PendingPayment; checkout activates it later.
/// Duplicate joins are rejected by the storage layer's uniqueness over
/// live memberships, so there is no read-then-write race here.
pub struct JoinClubHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl JoinClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    pub async fn handle(&self, cmd: JoinClubCommand) -> Result<JoinClubResult, MembershipError> {
        // 1. The club must exist
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| MembershipError::club_not_found(cmd.club_id.clone()))?;

        // 2. Free clubs skip checkout entirely
        let membership = if club.is_free() {
            Membership::create_active(
                MembershipId::new(),
                cmd.club_id.clone(),
                cmd.member_email.clone(),
            )
        } else {
            Membership::create_pending_payment(
                MembershipId::new(),
                cmd.club_id.clone(),
                cmd.member_email.clone(),
            )
        };

        // 3. Persist; the unique index turns a duplicate live join into a conflict
        if let Err(err) = self.memberships.insert(&membership).await {
            if err.code == ErrorCode::MembershipExists {
                return Err(MembershipError::already_joined(
                    cmd.club_id,
                    cmd.member_email,
                ));
            }
            return Err(err.into());
        }

        Ok(JoinClubResult { membership, club })
    }
}
