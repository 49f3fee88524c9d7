pub mod actions;
pub mod handler;

pub use actions::Marker;
pub use handler::{classify, confirm_message, describe, dispatch, Dispatch, PendingAction};
