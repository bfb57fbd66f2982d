//! Ownership trait for email-owned resources.
//!
//! Clubs and events are owned by the manager email that created them.
//! This trait standardizes ownership checking across those aggregates.
//!
//! # Example
//!
//! ```ignore
//! impl OwnedByEmail for Club {
//!     fn owner_email(&self) -> &EmailAddress {
//!         &self.manager_email
//!     }
//! }
//!
//! // In a handler:
//! club.check_ownership(&caller_email)?;  // Returns Err(Forbidden) if not owner
//! ```

use super::{DomainError, EmailAddress, ErrorCode};

/// Trait for aggregates that have a single owning identity.
///
/// Implementors should return the email of the owning manager.
/// The trait provides default implementations for ownership checking.
pub trait OwnedByEmail {
    /// Returns the email of the identity that owns this resource.
    fn owner_email(&self) -> &EmailAddress;

    /// Checks if the given email is the owner.
    fn is_owner(&self, email: &EmailAddress) -> bool {
        self.owner_email() == email
    }

    /// Validates ownership, returning an error if the caller is not the owner.
    ///
    /// This is the preferred method to use in command handlers as it
    /// returns a properly formed `DomainError` with `Forbidden` code.
    fn check_ownership(&self, email: &EmailAddress) -> Result<(), DomainError> {
        if self.is_owner(email) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "Caller does not own this resource",
            )
            .with_detail("owner", self.owner_email().to_string())
            .with_detail("requested_by", email.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        owner: EmailAddress,
    }

    impl OwnedByEmail for TestResource {
        fn owner_email(&self) -> &EmailAddress {
            &self.owner
        }
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).unwrap()
    }

    #[test]
    fn is_owner_returns_true_for_owner() {
        let owner = email("manager@example.com");
        let resource = TestResource { owner: owner.clone() };

        assert!(resource.is_owner(&owner));
    }

    #[test]
    fn is_owner_returns_false_for_non_owner() {
        let resource = TestResource {
            owner: email("manager@example.com"),
        };

        assert!(!resource.is_owner(&email("other@example.com")));
    }

    #[test]
    fn check_ownership_succeeds_for_owner() {
        let owner = email("manager@example.com");
        let resource = TestResource { owner: owner.clone() };

        assert!(resource.check_ownership(&owner).is_ok());
    }

    #[test]
    fn check_ownership_fails_for_non_owner() {
        let resource = TestResource {
            owner: email("manager@example.com"),
        };

        let err = resource
            .check_ownership(&email("other@example.com"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert!(err.message.contains("does not own"));
    }

    #[test]
    fn check_ownership_error_includes_details() {
        let resource = TestResource {
            owner: email("manager@example.com"),
        };

        let err = resource
            .check_ownership(&email("other@example.com"))
            .unwrap_err();

        assert_eq!(
            err.details.get("owner"),
            Some(&"manager@example.com".to_string())
        );
        assert_eq!(
            err.details.get("requested_by"),
            Some(&"other@example.com".to_string())
        );
    }
}
