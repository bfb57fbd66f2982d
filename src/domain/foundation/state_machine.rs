//! Lifecycle transitions for status enums.
//!
//! Membership, registration, and club statuses all move through fixed
//! graphs. Implementing [`StateMachine`] gives each enum a validated
//! `transition_to` and a terminal-state check.

use super::ValidationError;

/// A status enum with a fixed transition graph.
///
/// Implementors supply the graph twice, as a predicate and as an
/// enumeration, so callers can both validate a step and list the legal
/// next states. The two must agree; a consistency test per implementor
/// keeps them honest.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Whether the graph has an edge from `self` to `target`.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validated step. Aggregates change status only through this.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// A state with no outgoing edges never changes again.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ReviewStatus {
        Submitted,
        Approved,
        Rejected,
        Closed,
    }

    impl StateMachine for ReviewStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use ReviewStatus::*;
            matches!(
                (self, target),
                (Submitted, Approved)
                    | (Submitted, Rejected)
                    | (Approved, Closed)
                    | (Rejected, Closed)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use ReviewStatus::*;
            match self {
                Submitted => vec![Approved, Rejected],
                Approved => vec![Closed],
                Rejected => vec![Closed],
                Closed => vec![],
            }
        }
    }

    const ALL: [ReviewStatus; 4] = [
        ReviewStatus::Submitted,
        ReviewStatus::Approved,
        ReviewStatus::Rejected,
        ReviewStatus::Closed,
    ];

    #[test]
    fn legal_step_yields_the_target() {
        let next = ReviewStatus::Submitted.transition_to(ReviewStatus::Approved);
        assert_eq!(next, Ok(ReviewStatus::Approved));
    }

    #[test]
    fn skipping_a_state_is_rejected() {
        let next = ReviewStatus::Submitted.transition_to(ReviewStatus::Closed);
        assert!(next.is_err());
    }

    #[test]
    fn only_closed_is_terminal() {
        for status in ALL {
            assert_eq!(status.is_terminal(), status == ReviewStatus::Closed);
        }
    }

    #[test]
    fn predicate_agrees_with_the_enumerated_graph() {
        for from in ALL {
            for to in ALL {
                let listed = from.valid_transitions().contains(&to);
                assert_eq!(
                    from.can_transition_to(&to),
                    listed,
                    "graph disagreement on {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
