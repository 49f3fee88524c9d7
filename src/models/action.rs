use serde::{Deserialize, Serialize};

/// What a row action does once the user confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    StatusToggle,
    ApprovalToggle,
    PasswordReset,
    Delete,
    GenericConfirm,
}

impl ActionKind {
    /// Generic confirm elements only gate navigation and never talk to the server.
    pub fn is_network_backed(&self) -> bool {
        !matches!(self, ActionKind::GenericConfirm)
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ActionKind::StatusToggle => "Status updated successfully",
            ActionKind::ApprovalToggle => "Approval status updated successfully",
            ActionKind::PasswordReset => "Password reset successfully",
            ActionKind::Delete => "Item deleted successfully",
            ActionKind::GenericConfirm => "",
        }
    }

    /// Shown when the server answers `success: false` without a message.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ActionKind::StatusToggle => "Failed to update status",
            ActionKind::ApprovalToggle => "Failed to update approval status",
            ActionKind::PasswordReset => "Failed to reset password",
            ActionKind::Delete => "Failed to delete item",
            ActionKind::GenericConfirm => "",
        }
    }

    /// Shown when the request never produced a usable envelope.
    pub fn error_message(&self) -> &'static str {
        match self {
            ActionKind::StatusToggle => "An error occurred while updating status",
            ActionKind::ApprovalToggle => "An error occurred while updating approval status",
            ActionKind::PasswordReset => "An error occurred while resetting password",
            ActionKind::Delete => "An error occurred while deleting item",
            ActionKind::GenericConfirm => "",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::StatusToggle => write!(f, "status-toggle"),
            ActionKind::ApprovalToggle => write!(f, "approval-toggle"),
            ActionKind::PasswordReset => write!(f, "password-reset"),
            ActionKind::Delete => write!(f, "delete"),
            ActionKind::GenericConfirm => write!(f, "generic-confirm"),
        }
    }
}

/// Parameters read off the clicked element. Lives only for one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub target_url: String,
    pub item_id: String,
    pub item_label: Option<String>,
    pub confirm_message: Option<String>,
    /// Active/approved state before the click, for the two toggle kinds.
    pub current_state: Option<bool>,
}

impl ActionDescriptor {
    pub fn new(kind: ActionKind, target_url: String, item_id: String) -> Self {
        Self {
            kind,
            target_url,
            item_id,
            item_label: None,
            confirm_message: None,
            current_state: None,
        }
    }

    pub fn item_label(&self) -> &str {
        self.item_label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or("item")
    }

    /// Identity of the row this action belongs to, across tables on one page.
    ///
    /// The endpoint up to and including the item id segment, so
    /// `/api/users/7/delete/` and `/api/users/7/toggle-status/` share a key
    /// while `/api/properties/7/delete/` does not. Falls back to the whole URL
    /// when the id is not a path segment.
    pub fn row_key(&self) -> String {
        let segments: Vec<&str> = self.target_url.split('/').collect();
        match segments.iter().position(|segment| *segment == self.item_id) {
            Some(index) => format!("{}/", segments[..=index].join("/")),
            None => self.target_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_confirm_is_not_network_backed() {
        assert!(!ActionKind::GenericConfirm.is_network_backed());
        assert!(ActionKind::Delete.is_network_backed());
        assert!(ActionKind::PasswordReset.is_network_backed());
    }

    #[test]
    fn test_item_label_falls_back_to_item() {
        let mut descriptor =
            ActionDescriptor::new(ActionKind::Delete, "/users/3/delete/".into(), "3".into());
        assert_eq!(descriptor.item_label(), "item");

        descriptor.item_label = Some("  ".into());
        assert_eq!(descriptor.item_label(), "item");

        descriptor.item_label = Some("user".into());
        assert_eq!(descriptor.item_label(), "user");
    }

    #[test]
    fn test_row_key_is_shared_within_a_row_only() {
        let delete =
            ActionDescriptor::new(ActionKind::Delete, "/api/users/7/delete/".into(), "7".into());
        let toggle = ActionDescriptor::new(
            ActionKind::StatusToggle,
            "/api/users/7/toggle-status/".into(),
            "7".into(),
        );
        let property = ActionDescriptor::new(
            ActionKind::Delete,
            "/api/properties/7/delete/".into(),
            "7".into(),
        );

        assert_eq!(delete.row_key(), "/api/users/7/");
        assert_eq!(delete.row_key(), toggle.row_key());
        assert_ne!(delete.row_key(), property.row_key());

        let query = ActionDescriptor::new(ActionKind::Delete, "/delete?id=7".into(), "7".into());
        assert_eq!(query.row_key(), "/delete?id=7");
    }
}
