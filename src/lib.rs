//! Delegated row actions for server-rendered admin tables.
//!
//! One click listener on the document recognises toggle, approve, reset
//! password and delete links inside table rows, confirms with the user,
//! POSTs to the link's endpoint with the page's CSRF token and patches the
//! row from the JSON reply. The page itself is reached through [`ui::Page`],
//! so the same controller drives the browser DOM and the in-memory
//! [`ui::HeadlessPage`].

pub mod api;
pub mod app;
pub mod config;
pub mod events;
pub mod models;
pub mod state;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{error_message, RowActions};
