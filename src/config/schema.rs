use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Credential the server assigns on a password reset.
pub const DEFAULT_PASSWORD: &str = "DefaultPass@12";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowActionsConfig {
    pub timing: Timing,
    pub selectors: Selectors,
    /// Credential shown after a reset when the server does not echo one back.
    pub default_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub notification_timeout_ms: u64,
    pub notification_fade_ms: u64,
    pub row_transition_ms: u64,
    pub reload_delay_ms: u64,
    pub reload_after_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub token_input_name: String,
    pub token_meta_name: String,
    pub count_element_id: String,
    pub table_body_id: String,
    pub status_badge_class: String,
    pub approval_badge_class: String,
}

impl Default for RowActionsConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            selectors: Selectors::default(),
            default_password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 5000,
            notification_fade_ms: 300,
            row_transition_ms: 300,
            reload_delay_ms: 1000,
            reload_after_toggle: true,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            token_input_name: "csrfmiddlewaretoken".to_string(),
            token_meta_name: "csrf-token".to_string(),
            count_element_id: "item-count".to_string(),
            table_body_id: "table-body".to_string(),
            status_badge_class: "status-badge".to_string(),
            approval_badge_class: "approval-badge".to_string(),
        }
    }
}

impl RowActionsConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timing {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }

    pub fn row_transition(&self) -> Duration {
        Duration::from_millis(self.row_transition_ms)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}
