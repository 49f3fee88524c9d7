pub mod in_flight;
pub mod notifications;

pub use in_flight::{InFlight, PendingRequest};
pub use notifications::{LiveNotification, NotificationLevel, NotificationSlot};
