//! Declarative authorization policy.
//!
//! Every protected operation appears once in the table below with the role
//! it requires. The HTTP role guard evaluates this table after token
//! verification; handlers never branch on roles themselves.
//!
//! # Semantics
//!
//! - `Some(role)`: the caller's stored role must equal `role` exactly.
//!   Roles are flat - admin does not pass a manager gate.
//! - `None`: any authenticated identity passes (the member-level surface).
//!   Handlers guard these endpoints with `RequireAuth` alone and skip the
//!   role lookup entirely; the `None` entries exist so the table stays a
//!   complete inventory of the protected surface.
//!
//! Ownership checks (a manager may only touch their own clubs/events) are a
//! separate concern handled by `OwnedByEmail` inside the handlers.

use super::Role;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Protected operations, one per role-gated endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // User administration
    ListUsers,
    SetUserRole,

    // Club administration
    ListAllClubs,
    ReviewClub,
    ClubStats,

    // Club management
    CreateClub,
    UpdateClub,
    DeleteClub,
    ListOwnClubs,

    // Membership management
    ListManagedMemberships,
    ExpireMembership,

    // Event management
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
    ListOwnEvents,

    // Member-level actions
    JoinClub,
    ViewOwnMemberships,
    RegisterForEvent,
    CancelRegistration,
    ViewOwnRegistrations,
    StartCheckout,
    ConfirmPayment,
    ViewOwnPayments,

    // Payments administration
    ListPayments,

    // Summaries
    AdminSummary,
    ManagerSummary,
    MemberSummary,
}

impl Operation {
    /// The authorization policy table.
    ///
    /// Returns the exact role an operation requires, or `None` when any
    /// authenticated identity may invoke it.
    pub fn required_role(&self) -> Option<Role> {
        use Operation::*;
        match self {
            ListUsers | SetUserRole | ListAllClubs | ReviewClub | ClubStats | ListPayments
            | AdminSummary => Some(Role::Admin),

            CreateClub | UpdateClub | DeleteClub | ListOwnClubs | ListManagedMemberships
            | ExpireMembership | CreateEvent | UpdateEvent | DeleteEvent | ListOwnEvents
            | ManagerSummary => Some(Role::Manager),

            JoinClub | ViewOwnMemberships | RegisterForEvent | CancelRegistration
            | ViewOwnRegistrations | StartCheckout | ConfirmPayment | ViewOwnPayments
            | MemberSummary => None,
        }
    }

    /// Short name used in denial details and logs.
    pub fn name(&self) -> &'static str {
        use Operation::*;
        match self {
            ListUsers => "user.list",
            SetUserRole => "user.set_role",
            ListAllClubs => "club.list_all",
            ReviewClub => "club.review",
            ClubStats => "club.stats",
            CreateClub => "club.create",
            UpdateClub => "club.update",
            DeleteClub => "club.delete",
            ListOwnClubs => "club.list_own",
            ListManagedMemberships => "membership.list_managed",
            ExpireMembership => "membership.expire",
            CreateEvent => "event.create",
            UpdateEvent => "event.update",
            DeleteEvent => "event.delete",
            ListOwnEvents => "event.list_own",
            JoinClub => "membership.join",
            ViewOwnMemberships => "membership.view_own",
            RegisterForEvent => "registration.create",
            CancelRegistration => "registration.cancel",
            ViewOwnRegistrations => "registration.view_own",
            StartCheckout => "payment.checkout",
            ConfirmPayment => "payment.confirm",
            ViewOwnPayments => "payment.view_own",
            ListPayments => "payment.list",
            AdminSummary => "summary.admin",
            ManagerSummary => "summary.manager",
            MemberSummary => "summary.member",
        }
    }
}

/// Evaluates the policy table for one operation and stored role.
///
/// Returns `Err(Forbidden)` when the stored role does not satisfy the
/// operation; the error names the operation but never echoes request data.
pub fn authorize(operation: Operation, role: Role) -> Result<(), DomainError> {
    match operation.required_role() {
        None => Ok(()),
        Some(required) if role == required => Ok(()),
        Some(required) => Err(DomainError::new(
            ErrorCode::Forbidden,
            "Operation requires a different role",
        )
        .with_detail("operation", operation.name())
        .with_detail("required_role", required.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OPERATIONS: [Operation; 27] = [
        Operation::ListUsers,
        Operation::SetUserRole,
        Operation::ListAllClubs,
        Operation::ReviewClub,
        Operation::ClubStats,
        Operation::CreateClub,
        Operation::UpdateClub,
        Operation::DeleteClub,
        Operation::ListOwnClubs,
        Operation::ListManagedMemberships,
        Operation::ExpireMembership,
        Operation::CreateEvent,
        Operation::UpdateEvent,
        Operation::DeleteEvent,
        Operation::ListOwnEvents,
        Operation::JoinClub,
        Operation::ViewOwnMemberships,
        Operation::RegisterForEvent,
        Operation::CancelRegistration,
        Operation::ViewOwnRegistrations,
        Operation::StartCheckout,
        Operation::ConfirmPayment,
        Operation::ViewOwnPayments,
        Operation::ListPayments,
        Operation::AdminSummary,
        Operation::ManagerSummary,
        Operation::MemberSummary,
    ];

    #[test]
    fn admin_operations_require_admin() {
        assert_eq!(Operation::ListUsers.required_role(), Some(Role::Admin));
        assert_eq!(Operation::ReviewClub.required_role(), Some(Role::Admin));
        assert_eq!(Operation::AdminSummary.required_role(), Some(Role::Admin));
        assert_eq!(Operation::ListPayments.required_role(), Some(Role::Admin));
    }

    #[test]
    fn manager_operations_require_manager() {
        assert_eq!(Operation::CreateClub.required_role(), Some(Role::Manager));
        assert_eq!(
            Operation::ExpireMembership.required_role(),
            Some(Role::Manager)
        );
        assert_eq!(Operation::ManagerSummary.required_role(), Some(Role::Manager));
    }

    #[test]
    fn member_level_operations_need_no_stored_role() {
        // These endpoints are gated by authentication alone; handlers
        // never run a role lookup for them.
        for op in ALL_OPERATIONS {
            if matches!(
                op,
                Operation::JoinClub
                    | Operation::ViewOwnMemberships
                    | Operation::RegisterForEvent
                    | Operation::CancelRegistration
                    | Operation::ViewOwnRegistrations
                    | Operation::StartCheckout
                    | Operation::ConfirmPayment
                    | Operation::ViewOwnPayments
                    | Operation::MemberSummary
            ) {
                assert_eq!(op.required_role(), None, "{} should be open", op.name());
            } else {
                assert!(op.required_role().is_some(), "{} should be gated", op.name());
            }
        }
    }

    #[test]
    fn member_operations_accept_any_role() {
        for role in [Role::Member, Role::Manager, Role::Admin] {
            assert!(authorize(Operation::JoinClub, role).is_ok());
            assert!(authorize(Operation::StartCheckout, role).is_ok());
            assert!(authorize(Operation::MemberSummary, role).is_ok());
        }
    }

    #[test]
    fn roles_are_flat_not_hierarchical() {
        // Admin does not pass a manager gate, and vice versa.
        assert!(authorize(Operation::CreateClub, Role::Admin).is_err());
        assert!(authorize(Operation::ReviewClub, Role::Manager).is_err());
        assert!(authorize(Operation::ListUsers, Role::Member).is_err());
    }

    #[test]
    fn denial_carries_operation_and_required_role() {
        let err = authorize(Operation::SetUserRole, Role::Member).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("operation"), Some(&"user.set_role".to_string()));
        assert_eq!(err.details.get("required_role"), Some(&"admin".to_string()));
    }

    #[test]
    fn denial_holds_for_every_gated_operation_and_wrong_role() {
        for op in ALL_OPERATIONS {
            if let Some(required) = op.required_role() {
                for role in [Role::Member, Role::Manager, Role::Admin] {
                    let outcome = authorize(op, role);
                    if role == required {
                        assert!(outcome.is_ok(), "{:?} should allow {:?}", op, role);
                    } else {
                        assert!(outcome.is_err(), "{:?} should deny {:?}", op, role);
                    }
                }
            }
        }
    }
}
