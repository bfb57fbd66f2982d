//! DeleteClubHandler - Command handler for a manager removing their club.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, OwnedByEmail};
use crate::ports::ClubRepository;

/// Command to delete a club.
#[derive(Debug, Clone)]
pub struct DeleteClubCommand {
    pub club_id: ClubId,
    pub manager_email: EmailAddress,
}

/// Handler for club deletion. Only the owning manager may delete.
///
/// Payments snapshot the club name at confirmation time, so payment
/// history survives the delete.
pub struct DeleteClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl DeleteClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: DeleteClubCommand) -> Result<(), DomainError> {
        let club = self
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

        self.clubs.delete(&cmd.club_id).await
    }
}
