pub mod fragment;
pub mod headless;
pub mod notify;
pub mod page;
pub mod reconcile;

pub use fragment::Markup;
pub use headless::{HeadlessPage, NodeId, Scheduled};
pub use page::{Deferred, Page, Selector};
