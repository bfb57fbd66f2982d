//! ExpireMembershipHandler - Command handler for a manager force-expiring
//! a membership in one of their clubs.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, MembershipId, OwnedByEmail};
use crate::domain::membership::{Membership, MembershipError};
use crate::ports::{ClubRepository, MembershipRepository};

/// Command to force-expire a membership.
#[derive(Debug, Clone)]
pub struct ExpireMembershipCommand {
    pub membership_id: MembershipId,
    pub manager_email: EmailAddress,
}

/// Handler for force-expiring a membership.
///
/// Only the manager who owns the club may expire its memberships. The
/// expiry goes through the membership state machine, so a membership
/// that is already terminal is rejected with a state error.
pub struct ExpireMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
    clubs: Arc<dyn ClubRepository>,
}

impl ExpireMembershipHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>, clubs: Arc<dyn ClubRepository>) -> Self {
        Self { memberships, clubs }
    }

    pub async fn handle(&self, cmd: ExpireMembershipCommand) -> Result<Membership, DomainError> {
        let mut membership = self
            .memberships
            .find_by_id(&cmd.membership_id)
            .await?
            .ok_or_else(|| MembershipError::not_found(cmd.membership_id.clone()))?;

        let club = self
            .clubs
            .find_by_id(&membership.club_id)
            .await?
            .ok_or_else(|| MembershipError::club_not_found(membership.club_id.clone()))?;

        club.check_ownership(&cmd.manager_email)?;

        membership.expire()?;
        self.memberships.update(&membership).await?;

        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Club, ClubSearch};
    use crate::domain::foundation::{ClubId, ErrorCode};
    use crate::domain::membership::MembershipStatus;
    use crate::ports::MembershipWithClub;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockMembershipRepository {
        stored: Mutex<Vec<Membership>>,
        updated: Mutex<Vec<Membership>>,
    }

    impl MockMembershipRepository {
        fn with_membership(membership: Membership) -> Self {
            Self {
                stored: Mutex::new(vec![membership]),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                stored: Mutex::new(Vec::new()),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn updated(&self) -> Vec<Membership> {
            self.updated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MembershipRepository for MockMembershipRepository {
        async fn insert(&self, _membership: &Membership) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
            self.updated.lock().unwrap().push(membership.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &MembershipId,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.id == id)
                .cloned())
        }

        async fn find_live(
            &self,
            _club_id: &ClubId,
            _member_email: &EmailAddress,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(None)
        }

        async fn list_by_member(
            &self,
            _member_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_manager(
            &self,
            _manager_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(vec![])
        }
    }

    struct MockClubRepository {
        clubs: Mutex<Vec<Club>>,
    }

    impl MockClubRepository {
        fn with_club(club: Club) -> Self {
            Self {
                clubs: Mutex::new(vec![club]),
            }
        }
    }

    #[async_trait]
    impl ClubRepository for MockClubRepository {
        async fn insert(&self, _club: &Club) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _club: &Club) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &ClubId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
            Ok(self
                .clubs
                .lock()
                .unwrap()
                .iter()
                .find(|c| &c.id == id)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn list_approved(&self, _limit: Option<i64>) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_manager(
            &self,
            _manager_email: &EmailAddress,
        ) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn search(&self, _query: &ClubSearch) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn manager_email() -> EmailAddress {
        EmailAddress::new("manager@example.com").unwrap()
    }

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    fn club_owned_by_manager() -> Club {
        Club::create(
            ClubId::new(),
            "Chess Club",
            "Weekly games",
            "Games",
            "Community Hall",
            0,
            None,
            manager_email(),
        )
        .unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn owner_can_expire_active_membership() {
        let club = club_owned_by_manager();
        let membership =
            Membership::create_active(MembershipId::new(), club.id.clone(), member_email());
        let memberships = Arc::new(MockMembershipRepository::with_membership(membership.clone()));
        let clubs = Arc::new(MockClubRepository::with_club(club));

        let handler = ExpireMembershipHandler::new(memberships.clone(), clubs);
        let expired = handler
            .handle(ExpireMembershipCommand {
                membership_id: membership.id,
                manager_email: manager_email(),
            })
            .await
            .unwrap();

        assert_eq!(expired.status, MembershipStatus::Expired);
        assert_eq!(memberships.updated().len(), 1);
    }

    #[tokio::test]
    async fn owner_can_expire_stale_pending_join() {
        let club = club_owned_by_manager();
        let membership = Membership::create_pending_payment(
            MembershipId::new(),
            club.id.clone(),
            member_email(),
        );
        let memberships = Arc::new(MockMembershipRepository::with_membership(membership.clone()));
        let clubs = Arc::new(MockClubRepository::with_club(club));

        let handler = ExpireMembershipHandler::new(memberships, clubs);
        let expired = handler
            .handle(ExpireMembershipCommand {
                membership_id: membership.id,
                manager_email: manager_email(),
            })
            .await
            .unwrap();

        assert_eq!(expired.status, MembershipStatus::Expired);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_when_membership_absent() {
        let club = club_owned_by_manager();
        let memberships = Arc::new(MockMembershipRepository::empty());
        let clubs = Arc::new(MockClubRepository::with_club(club));

        let handler = ExpireMembershipHandler::new(memberships, clubs);
        let result = handler
            .handle(ExpireMembershipCommand {
                membership_id: MembershipId::new(),
                manager_email: manager_email(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::MembershipNotFound);
    }

    #[tokio::test]
    async fn denies_non_owner() {
        let club = club_owned_by_manager();
        let membership =
            Membership::create_active(MembershipId::new(), club.id.clone(), member_email());
        let memberships = Arc::new(MockMembershipRepository::with_membership(membership.clone()));
        let clubs = Arc::new(MockClubRepository::with_club(club));

        let handler = ExpireMembershipHandler::new(memberships.clone(), clubs);
        let result = handler
            .handle(ExpireMembershipCommand {
                membership_id: membership.id,
                manager_email: EmailAddress::new("intruder@example.com").unwrap(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::Forbidden);
        assert!(memberships.updated().is_empty());
    }

    #[tokio::test]
    async fn expired_membership_cannot_expire_again() {
        let club = club_owned_by_manager();
        let mut membership =
            Membership::create_active(MembershipId::new(), club.id.clone(), member_email());
        membership.expire().unwrap();
        let memberships = Arc::new(MockMembershipRepository::with_membership(membership.clone()));
        let clubs = Arc::new(MockClubRepository::with_club(club));

        let handler = ExpireMembershipHandler::new(memberships, clubs);
        let result = handler
            .handle(ExpireMembershipCommand {
                membership_id: membership.id,
                manager_email: manager_email(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidStateTransition);
    }
}
