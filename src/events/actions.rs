use crate::models::ActionKind;
use crate::ui::Selector;

pub const URL_ATTR: &str = "data-url";
pub const ITEM_ID_ATTR: &str = "data-item-id";
pub const ITEM_NAME_ATTR: &str = "data-item-name";
pub const CONFIRM_ATTR: &str = "data-confirm";

/// Marker on an action element, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    ToggleStatus,
    ToggleApproval,
    ResetPassword,
    Delete,
    Confirm,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::ToggleStatus,
        Marker::ToggleApproval,
        Marker::ResetPassword,
        Marker::Delete,
        Marker::Confirm,
    ];

    pub fn selector(&self) -> Selector<'static> {
        match self {
            Marker::ToggleStatus => Selector::Class("toggle-status-action"),
            Marker::ToggleApproval => Selector::Class("toggle-approval-action"),
            Marker::ResetPassword => Selector::Class("reset-password-action"),
            Marker::Delete => Selector::Class("delete-action"),
            Marker::Confirm => Selector::Attribute(CONFIRM_ATTR),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Marker::ToggleStatus => ActionKind::StatusToggle,
            Marker::ToggleApproval => ActionKind::ApprovalToggle,
            Marker::ResetPassword => ActionKind::PasswordReset,
            Marker::Delete => ActionKind::Delete,
            Marker::Confirm => ActionKind::GenericConfirm,
        }
    }

    /// Navigational markers suppress the link's default action unconditionally.
    pub fn intercepts_navigation(&self) -> bool {
        self.kind().is_network_backed()
    }
}
