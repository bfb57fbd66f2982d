//! Club aggregate entity.
//!
//! A club is created by a manager, reviewed by an admin, and joined by
//! members. The managing email owns all mutations except the review
//! decision.
//!
//! # Design Decisions
//!
//! - **Money in minor units**: the membership fee is an i64 cent amount,
//!   never a float
//! - **Fee zero means free**: joining a free club skips checkout entirely
//! - **Review via state machine**: approve/reject go through `ClubStatus`
//!   transitions so a decided club can be re-reviewed but never un-created

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, OwnedByEmail, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::ClubStatus;

/// Upper bound for a membership fee in minor units (10,000.00 in major units).
pub const MAX_FEE_MINOR: i64 = 1_000_000;

/// Club aggregate - a listed club that members can join.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` is non-empty
/// - `0 <= membership_fee <= MAX_FEE_MINOR`
/// - Status transitions follow state machine rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Unique identifier for this club.
    pub id: ClubId,

    /// Club name shown in listings.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Category used for exact-match search filtering.
    pub category: String,

    /// Where the club meets.
    pub location: String,

    /// Membership fee in minor currency units. Zero means free.
    pub membership_fee: i64,

    /// Banner image URL, if one was uploaded.
    pub banner_url: Option<String>,

    /// Email of the manager who owns this club.
    pub manager_email: EmailAddress,

    /// Current review status.
    pub status: ClubStatus,

    /// When the club was created.
    pub created_at: Timestamp,

    /// When the club was last updated.
    pub updated_at: Timestamp,
}

/// Fields a manager may change after creation.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub membership_fee: Option<i64>,
    pub banner_url: Option<String>,
}

impl Club {
    /// Create a new club awaiting review.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: ClubId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        membership_fee: i64,
        banner_url: Option<String>,
        manager_email: EmailAddress,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        validate_fee(membership_fee)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            description: description.into(),
            category: category.into(),
            location: location.into(),
            membership_fee,
            banner_url,
            manager_email,
            status: ClubStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// True when joining requires no payment.
    pub fn is_free(&self) -> bool {
        self.membership_fee == 0
    }

    /// Apply a manager edit, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns error if the new name is empty or the new fee is out of range.
    pub fn apply_update(&mut self, update: ClubUpdate) -> Result<(), DomainError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name").into());
            }
            self.name = name;
        }
        if let Some(fee) = update.membership_fee {
            validate_fee(fee)?;
            self.membership_fee = fee;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(banner_url) = update.banner_url {
            self.banner_url = Some(banner_url);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Approve this club for public listing.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.transition_to(ClubStatus::Approved)
    }

    /// Reject this club.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        self.transition_to(ClubStatus::Rejected)
    }

    /// Transition to a new status using the state machine.
    fn transition_to(&mut self, target: ClubStatus) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition club from {:?} to {:?}", self.status, target),
            )
        })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

impl OwnedByEmail for Club {
    fn owner_email(&self) -> &EmailAddress {
        &self.manager_email
    }
}

fn validate_fee(fee: i64) -> Result<(), DomainError> {
    if !(0..=MAX_FEE_MINOR).contains(&fee) {
        return Err(ValidationError::out_of_range("membership_fee", 0, MAX_FEE_MINOR, fee).into());
    }
    Ok(())
}
