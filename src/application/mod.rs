//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::club::{
    ClubQueries, CreateClubCommand, CreateClubHandler, DeleteClubCommand, DeleteClubHandler,
    ReviewClubCommand, ReviewClubHandler, ReviewDecision, UpdateClubCommand, UpdateClubHandler,
};
pub use handlers::event::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand, DeleteEventHandler, EventQueries,
    UpdateEventCommand, UpdateEventHandler,
};
pub use handlers::membership::{
    ExpireMembershipCommand, ExpireMembershipHandler, JoinClubCommand, JoinClubHandler,
    JoinClubResult, MembershipQueries,
};
pub use handlers::payment::{
    ConfirmPaymentCommand, ConfirmPaymentHandler, PaymentQueries, ProcessWebhookCommand,
    ProcessWebhookHandler, ReconcilePaymentCommand, ReconcilePaymentHandler,
    ReconcilePaymentResult, StartCheckoutCommand, StartCheckoutHandler, StartCheckoutResult,
};
pub use handlers::registration::{
    CancelRegistrationCommand, CancelRegistrationHandler, RegisterForEventCommand,
    RegisterForEventHandler, RegistrationQueries,
};
pub use handlers::summary::SummaryQueries;
pub use handlers::user::{
    SetUserRoleCommand, SetUserRoleHandler, SignInCommand, SignInHandler, SignInResult,
    UserQueries,
};
