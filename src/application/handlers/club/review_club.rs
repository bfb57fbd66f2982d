//! ReviewClubHandler - Command handler for the admin review decision.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{ClubId, DomainError, ErrorCode};
use crate::ports::ClubRepository;
use serde::Deserialize;

/// The admin's verdict on a pending club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Command to review a club.
#[derive(Debug, Clone)]
pub struct ReviewClubCommand {
    pub club_id: ClubId,
    pub decision: ReviewDecision,
}

/// Handler for the admin review decision.
///
/// Approve and reject go through the club status state machine, which
/// permits re-reviewing a decided club but never re-creating one.
pub struct ReviewClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl ReviewClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: ReviewClubCommand) -> Result<Club, DomainError> {
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

        match cmd.decision {
            ReviewDecision::Approve => club.approve()?,
            ReviewDecision::Reject => club.reject()?,
        }

        self.clubs.update(&club).await?;
        Ok(club)
    }
}
