//! Errors raised by the membership aggregate.
//!
//! Covers join attempts, lookups, and lifecycle transitions. The HTTP
//! layer answers 404 for the not-found variants, 409 for
//! `AlreadyJoined` and `InvalidState`, 400 for `ValidationFailed`, and
//! 500 for `Infrastructure`.

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, MembershipId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No membership with this id.
    NotFound(MembershipId),

    /// No membership for this member in this club.
    NotFoundForMember {
        club_id: ClubId,
        member_email: EmailAddress,
    },

    /// The club being joined does not exist.
    ClubNotFound(ClubId),

    /// The member already holds a live membership here.
    AlreadyJoined {
        club_id: ClubId,
        member_email: EmailAddress,
    },

    /// The membership's current status forbids the operation.
    InvalidState {
        current: String,
        attempted: String,
    },

    /// A command field failed validation.
    ValidationFailed {
        field: String,
        message: String,
    },

    /// Storage or downstream failure.
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(id: MembershipId) -> Self {
        MembershipError::NotFound(id)
    }

    pub fn not_found_for_member(club_id: ClubId, member_email: EmailAddress) -> Self {
        MembershipError::NotFoundForMember {
            club_id,
            member_email,
        }
    }

    pub fn club_not_found(club_id: ClubId) -> Self {
        MembershipError::ClubNotFound(club_id)
    }

    pub fn already_joined(club_id: ClubId, member_email: EmailAddress) -> Self {
        MembershipError::AlreadyJoined {
            club_id,
            member_email,
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        MembershipError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// The wire code this error maps to.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) | MembershipError::NotFoundForMember { .. } => {
                ErrorCode::MembershipNotFound
            }
            MembershipError::ClubNotFound(_) => ErrorCode::ClubNotFound,
            MembershipError::AlreadyJoined { .. } => ErrorCode::MembershipExists,
            MembershipError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Human-readable message for the response body.
    pub fn message(&self) -> String {
        match self {
            MembershipError::NotFound(id) => format!("Membership not found: {}", id),
            MembershipError::NotFoundForMember {
                club_id,
                member_email,
            } => format!(
                "No membership found for {} in club {}",
                member_email, club_id
            ),
            MembershipError::ClubNotFound(club_id) => format!("Club not found: {}", club_id),
            MembershipError::AlreadyJoined { club_id, .. } => {
                format!("Already a member of club {}", club_id)
            }
            MembershipError::InvalidState { current, attempted } => {
                format!("Cannot {} membership in {} state", attempted, current)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Only infrastructure failures are worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MembershipError::Infrastructure(_))
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => MembershipError::InvalidState {
                current: "unknown".to_string(),
                attempted: err.to_string(),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::OutOfRange => MembershipError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership_id() -> MembershipId {
        MembershipId::new()
    }

    fn club_id() -> ClubId {
        ClubId::new()
    }

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    #[test]
    fn each_variant_maps_to_its_wire_code() {
        let cases = [
            (
                MembershipError::not_found(membership_id()),
                ErrorCode::MembershipNotFound,
            ),
            (
                MembershipError::not_found_for_member(club_id(), member_email()),
                ErrorCode::MembershipNotFound,
            ),
            (
                MembershipError::club_not_found(club_id()),
                ErrorCode::ClubNotFound,
            ),
            (
                MembershipError::already_joined(club_id(), member_email()),
                ErrorCode::MembershipExists,
            ),
            (
                MembershipError::invalid_state("expired", "activate"),
                ErrorCode::InvalidStateTransition,
            ),
            (
                MembershipError::validation("club_id", "missing"),
                ErrorCode::ValidationFailed,
            ),
            (
                MembershipError::infrastructure("connection lost"),
                ErrorCode::DatabaseError,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code, "wrong code for {:?}", err);
        }
    }

    #[test]
    fn not_found_message_names_the_id() {
        let id = membership_id();
        let err = MembershipError::not_found(id.clone());
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn already_joined_message_names_the_club() {
        let id = club_id();
        let err = MembershipError::already_joined(id.clone(), member_email());
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn invalid_state_message_names_both_states() {
        let err = MembershipError::invalid_state("expired", "activate");
        assert_eq!(err.message(), "Cannot activate membership in expired state");
    }

    #[test]
    fn only_infrastructure_is_retryable() {
        assert!(MembershipError::infrastructure("timeout").is_retryable());
        assert!(!MembershipError::validation("club_id", "missing").is_retryable());
        assert!(!MembershipError::already_joined(club_id(), member_email()).is_retryable());
    }

    #[test]
    fn display_delegates_to_message() {
        let err = MembershipError::club_not_found(club_id());
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn round_trips_through_domain_error() {
        let err = MembershipError::not_found(membership_id());
        let domain: DomainError = err.clone().into();
        assert_eq!(domain.code, err.code());

        let back: MembershipError =
            DomainError::new(ErrorCode::InvalidStateTransition, "bad transition").into();
        assert_eq!(back.code(), ErrorCode::InvalidStateTransition);
    }
}
