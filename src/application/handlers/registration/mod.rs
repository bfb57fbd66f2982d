//! Registration handlers - taking and giving up event spots.

mod cancel_registration;
mod register_for_event;
mod registration_queries;

pub use cancel_registration::{CancelRegistrationCommand, CancelRegistrationHandler};
pub use register_for_event::{RegisterForEventCommand, RegisterForEventHandler};
pub use registration_queries::RegistrationQueries;
