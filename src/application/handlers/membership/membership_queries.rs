//! Query handlers for membership reads.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use crate::domain::membership::Membership;
use crate::ports::{MembershipRepository, MembershipWithClub};

/// Read-side handler for membership lists and lookups.
pub struct MembershipQueries {
    memberships: Arc<dyn MembershipRepository>,
}

impl MembershipQueries {
    pub fn new(memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { memberships }
    }

    /// The member's live membership in one club, if any.
    pub async fn my_membership(
        &self,
        club_id: &ClubId,
        member_email: &EmailAddress,
    ) -> Result<Option<Membership>, DomainError> {
        self.memberships.find_live(club_id, member_email).await
    }

    /// All of the member's memberships, newest first.
    pub async fn list_mine(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError> {
        self.memberships.list_by_member(member_email).await
    }

    /// Memberships across every club the manager owns, newest first.
    pub async fn list_managed(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError> {
        self.memberships.list_by_manager(manager_email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MembershipId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMembershipRepository {
        live: Mutex<Vec<Membership>>,
        by_member: Mutex<Vec<MembershipWithClub>>,
    }

    impl MockMembershipRepository {
        fn new() -> Self {
            Self {
                live: Mutex::new(Vec::new()),
                by_member: Mutex::new(Vec::new()),
            }
        }

        fn with_live(membership: Membership) -> Self {
            Self {
                live: Mutex::new(vec![membership]),
                by_member: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MembershipRepository for MockMembershipRepository {
        async fn insert(&self, _membership: &Membership) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _membership: &Membership) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &MembershipId,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(None)
        }

        async fn find_live(
            &self,
            club_id: &ClubId,
            member_email: &EmailAddress,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(self
                .live
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.club_id == club_id && &m.member_email == member_email)
                .cloned())
        }

        async fn list_by_member(
            &self,
            _member_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(self.by_member.lock().unwrap().clone())
        }

        async fn list_by_manager(
            &self,
            _manager_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(vec![])
        }
    }

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    #[tokio::test]
    async fn my_membership_finds_live_row() {
        let club_id = ClubId::new();
        let membership =
            Membership::create_active(MembershipId::new(), club_id.clone(), member_email());
        let queries = MembershipQueries::new(Arc::new(MockMembershipRepository::with_live(
            membership.clone(),
        )));

        let found = queries
            .my_membership(&club_id, &member_email())
            .await
            .unwrap();
        assert_eq!(found, Some(membership));
    }

    #[tokio::test]
    async fn my_membership_returns_none_when_absent() {
        let queries = MembershipQueries::new(Arc::new(MockMembershipRepository::new()));

        let found = queries
            .my_membership(&ClubId::new(), &member_email())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn list_mine_returns_empty_for_new_member() {
        let queries = MembershipQueries::new(Arc::new(MockMembershipRepository::new()));

        let mine = queries.list_mine(&member_email()).await.unwrap();
        assert!(mine.is_empty());
    }
}
