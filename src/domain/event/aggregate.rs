//! Event aggregate entity.
//!
//! Events are one-off happenings posted by managers. Members register for
//! them independently of club membership. An event may optionally belong
//! to a club.
//!
//! # Design Decisions
//!
//! - **Creator email owns the event**: only the creating manager updates
//!   or deletes it
//! - **Paid flag with fee**: `fee` is an i64 minor-unit amount and is
//!   forced to zero whenever `is_paid` is false

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, EventId, OwnedByEmail, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use crate::domain::club::MAX_FEE_MINOR;

/// Event aggregate - a happening members can register for.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `title` is non-empty
/// - `fee == 0` whenever `is_paid` is false
/// - `0 <= fee <= MAX_FEE_MINOR`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this event.
    pub id: EventId,

    /// Event title shown in listings.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Where the event takes place.
    pub location: String,

    /// When the event takes place.
    pub event_date: Timestamp,

    /// Whether attending costs money.
    pub is_paid: bool,

    /// Attendance fee in minor currency units. Zero for free events.
    pub fee: i64,

    /// Club this event belongs to, if any.
    pub club_id: Option<ClubId>,

    /// Email of the manager who created this event.
    pub created_by: EmailAddress,

    /// When the event was created.
    pub created_at: Timestamp,

    /// When the event was last updated.
    pub updated_at: Timestamp,
}

/// Fields a manager may change after creation.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<Timestamp>,
    pub is_paid: Option<bool>,
    pub fee: Option<i64>,
}

impl Event {
    /// Create a new event.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        event_date: Timestamp,
        is_paid: bool,
        fee: i64,
        club_id: Option<ClubId>,
        created_by: EmailAddress,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        validate_fee(fee)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            description: description.into(),
            location: location.into(),
            event_date,
            is_paid,
            fee: if is_paid { fee } else { 0 },
            club_id,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a creator edit, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns error if the new title is empty or the new fee is out of range.
    pub fn apply_update(&mut self, update: EventUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title").into());
            }
            self.title = title;
        }
        if let Some(fee) = update.fee {
            validate_fee(fee)?;
            self.fee = fee;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(event_date) = update.event_date {
            self.event_date = event_date;
        }
        if let Some(is_paid) = update.is_paid {
            self.is_paid = is_paid;
        }
        if !self.is_paid {
            self.fee = 0;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// True when the event date is in the future.
    pub fn is_upcoming(&self) -> bool {
        self.event_date.is_after(&Timestamp::now())
    }
}

impl OwnedByEmail for Event {
    fn owner_email(&self) -> &EmailAddress {
        &self.created_by
    }
}

fn validate_fee(fee: i64) -> Result<(), DomainError> {
    if !(0..=MAX_FEE_MINOR).contains(&fee) {
        return Err(ValidationError::out_of_range("fee", 0, MAX_FEE_MINOR, fee).into());
    }
    Ok(())
}
