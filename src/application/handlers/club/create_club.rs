//! CreateClubHandler - Command handler for a manager listing a new club.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use crate::ports::ClubRepository;

/// Command to create a club.
#[derive(Debug, Clone)]
pub struct CreateClubCommand {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub membership_fee: i64,
    pub banner_url: Option<String>,
    pub manager_email: EmailAddress,
}

/// Handler for club creation.
///
/// New clubs start in Pending and stay off the public directory until
/// an admin approves them.
pub struct CreateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl CreateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: CreateClubCommand) -> Result<Club, DomainError> {
        let club = Club::create(
            ClubId::new(),
            cmd.name,
            cmd.description,
            cmd.category,
            cmd.location,
            cmd.membership_fee,
            cmd.banner_url,
            cmd.manager_email,
        )?;

        self.clubs.insert(&club).await?;
        Ok(club)
    }
}
