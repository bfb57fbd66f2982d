//! Registration status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Event registration status.
///
/// A registration is live until the member cancels it. Re-registering
/// after a cancellation creates a new registration rather than reviving
/// the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Member holds a spot at the event.
    Registered,

    /// Member gave up the spot. Terminal.
    Canceled,
}

impl RegistrationStatus {
    /// Returns true while this registration occupies the member's spot.
    pub fn is_live(&self) -> bool {
        matches!(self, RegistrationStatus::Registered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Canceled => "canceled",
        }
    }
}

impl StateMachine for RegistrationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RegistrationStatus::*;
        matches!((self, target), (Registered, Canceled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RegistrationStatus::*;
        match self {
            Registered => vec![Canceled],
            Canceled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_can_cancel() {
        let status = RegistrationStatus::Registered;
        assert!(status.can_transition_to(&RegistrationStatus::Canceled));

        let result = status.transition_to(RegistrationStatus::Canceled);
        assert_eq!(result, Ok(RegistrationStatus::Canceled));
    }

    #[test]
    fn canceled_is_terminal() {
        assert!(RegistrationStatus::Canceled.is_terminal());

        let result = RegistrationStatus::Canceled.transition_to(RegistrationStatus::Registered);
        assert!(result.is_err());
    }

    #[test]
    fn only_registered_is_live() {
        assert!(RegistrationStatus::Registered.is_live());
        assert!(!RegistrationStatus::Canceled.is_live());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&RegistrationStatus::Registered).unwrap();
        assert_eq!(json, "\"registered\"");
    }
}
