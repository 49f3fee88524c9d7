pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{RowActionsConfig, Selectors, Timing, DEFAULT_PASSWORD};
