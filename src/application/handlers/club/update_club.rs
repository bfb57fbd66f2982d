//! UpdateClubHandler - Command handler for a manager editing their club.

use std::sync::Arc;

use crate::domain::club::{Club, ClubUpdate};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, OwnedByEmail};
use crate::ports::ClubRepository;

/// Command to edit a club.
#[derive(Debug, Clone)]
pub struct UpdateClubCommand {
    pub club_id: ClubId,
    pub manager_email: EmailAddress,
    pub update: ClubUpdate,
}

/// Handler for club edits. Only the owning manager may edit.
pub struct UpdateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl UpdateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: UpdateClubCommand) -> Result<Club, DomainError> {
        let mut club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ClubNotFound,
                    format!("Club not found: {}", cmd.club_id),
                )
            })?;

        club.check_ownership(&cmd.manager_email)?;

        club.apply_update(cmd.update)?;
        self.clubs.update(&club).await?;

        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::ClubSearch;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockClubRepository {
        clubs: Mutex<Vec<Club>>,
        updated: Mutex<Vec<Club>>,
    }

    impl MockClubRepository {
        fn with_club(club: Club) -> Self {
            Self {
                clubs: Mutex::new(vec![club]),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                clubs: Mutex::new(Vec::new()),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn updated(&self) -> Vec<Club> {
            self.updated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ClubRepository for MockClubRepository {
        async fn insert(&self, _club: &Club) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, club: &Club) -> Result<(), DomainError> {
            self.updated.lock().unwrap().push(club.clone());
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

    fn manager_email() -> EmailAddress {
        EmailAddress::new("manager@example.com").unwrap()
    }

    fn test_club() -> Club {
        Club::create(
            ClubId::new(),
            "Chess Club",
            "Weekly games",
            "Games",
            "Community Hall",
            1500,
            None,
            manager_email(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn owner_can_update_fields() {
        let club = test_club();
        let clubs = Arc::new(MockClubRepository::with_club(club.clone()));
        let handler = UpdateClubHandler::new(clubs.clone());

        let updated = handler
            .handle(UpdateClubCommand {
                club_id: club.id,
                manager_email: manager_email(),
                update: ClubUpdate {
                    name: Some("Chess Society".to_string()),
                    membership_fee: Some(2000),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Chess Society");
        assert_eq!(updated.membership_fee, 2000);
        // Untouched fields survive
        assert_eq!(updated.category, "Games");
        assert_eq!(clubs.updated().len(), 1);
    }

    #[tokio::test]
    async fn denies_non_owner() {
        let club = test_club();
        let clubs = Arc::new(MockClubRepository::with_club(club.clone()));
        let handler = UpdateClubHandler::new(clubs.clone());

        let result = handler
            .handle(UpdateClubCommand {
                club_id: club.id,
                manager_email: EmailAddress::new("other@example.com").unwrap(),
                update: ClubUpdate::default(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::Forbidden);
        assert!(clubs.updated().is_empty());
    }

    #[tokio::test]
    async fn fails_when_club_absent() {
        let clubs = Arc::new(MockClubRepository::empty());
        let handler = UpdateClubHandler::new(clubs);

        let result = handler
            .handle(UpdateClubCommand {
                club_id: ClubId::new(),
                manager_email: manager_email(),
                update: ClubUpdate::default(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::ClubNotFound);
    }

    #[tokio::test]
    async fn rejects_invalid_edit() {
        let club = test_club();
        let clubs = Arc::new(MockClubRepository::with_club(club.clone()));
        let handler = UpdateClubHandler::new(clubs.clone());

        let result = handler
            .handle(UpdateClubCommand {
                club_id: club.id,
                manager_email: manager_email(),
                update: ClubUpdate {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(result.is_err());
        assert!(clubs.updated().is_empty());
    }
}
