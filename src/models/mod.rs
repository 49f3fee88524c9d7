pub mod action;
pub mod envelope;

pub use action::{ActionDescriptor, ActionKind};
pub use envelope::{ActionResult, NewStatus};
