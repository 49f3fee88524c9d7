use crate::config::RowActionsConfig;
use crate::models::{ActionDescriptor, ActionKind};
use crate::state::InFlight;
use crate::ui::reconcile::{
    parse_bool_attr, ACTIVE_STATE_ATTR, APPROVED_STATE_ATTR, REMOVING_ATTR,
};
use crate::ui::{Page, Selector};

use super::actions::{Marker, CONFIRM_ATTR, ITEM_ID_ATTR, ITEM_NAME_ATTR, URL_ATTR};

/// A confirmed action waiting for its request.
#[derive(Debug, Clone)]
pub struct PendingAction<N> {
    pub descriptor: ActionDescriptor,
    pub link: N,
    pub row: Option<N>,
}

/// What a click turned into.
#[derive(Debug, Clone)]
pub enum Dispatch<N> {
    /// Not an action element.
    Ignored,
    /// Generic confirm accepted; let the browser follow the link.
    Proceed,
    /// The user said no.
    Declined(ActionKind),
    /// The row already has a request on the wire.
    Busy(ActionKind),
    /// The element lacks a required attribute.
    Misconfigured {
        kind: ActionKind,
        missing: &'static str,
    },
    Run(PendingAction<N>),
}

impl<N> Dispatch<N> {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Dispatch::Ignored | Dispatch::Proceed)
    }
}

/// Find the first marker on the ancestor chain of `target`.
pub fn classify<P: Page>(page: &P, target: &P::Node) -> Option<(Marker, P::Node)> {
    Marker::ALL.iter().find_map(|marker| {
        page.closest(target, &marker.selector())
            .map(|element| (*marker, element))
    })
}

/// Classify a click, gate it on confirmation and describe the action to run.
pub fn dispatch<P: Page>(
    page: &mut P,
    target: &P::Node,
    in_flight: &InFlight,
    config: &RowActionsConfig,
) -> Dispatch<P::Node> {
    let Some((marker, element)) = classify(page, target) else {
        return Dispatch::Ignored;
    };

    if !marker.intercepts_navigation() {
        let message = page.attribute(&element, CONFIRM_ATTR).unwrap_or_default();
        return if page.confirm(&message) {
            Dispatch::Proceed
        } else {
            Dispatch::Declined(ActionKind::GenericConfirm)
        };
    }

    let descriptor = match describe(page, marker, &element) {
        Ok(descriptor) => descriptor,
        Err(missing) => {
            return Dispatch::Misconfigured {
                kind: marker.kind(),
                missing,
            }
        }
    };

    let row = page.closest(&element, &Selector::Tag("tr"));
    let removing = row
        .as_ref()
        .is_some_and(|row| page.attribute(row, REMOVING_ATTR).is_some());
    if removing || in_flight.contains(&descriptor.row_key()) {
        return Dispatch::Busy(descriptor.kind);
    }

    if !page.confirm(&confirm_message(&descriptor, config)) {
        return Dispatch::Declined(descriptor.kind);
    }

    Dispatch::Run(PendingAction {
        descriptor,
        link: element,
        row,
    })
}

/// Read the action parameters off the marked element.
pub fn describe<P: Page>(
    page: &P,
    marker: Marker,
    element: &P::Node,
) -> Result<ActionDescriptor, &'static str> {
    let read = |name: &str| {
        page.attribute(element, name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let target_url = read(URL_ATTR).ok_or(URL_ATTR)?;
    let item_id = read(ITEM_ID_ATTR).ok_or(ITEM_ID_ATTR)?;

    let mut descriptor = ActionDescriptor::new(marker.kind(), target_url, item_id);
    descriptor.item_label = read(ITEM_NAME_ATTR);
    descriptor.confirm_message = read(CONFIRM_ATTR);
    descriptor.current_state = match marker {
        Marker::ToggleStatus => Some(current_state(page, element, ACTIVE_STATE_ATTR, |label| {
            // "Activate" is offered while inactive; "Deactivate" does not contain it.
            !label.contains("Activate")
        })),
        Marker::ToggleApproval => Some(current_state(page, element, APPROVED_STATE_ATTR, |label| {
            label.contains("Unapprove")
        })),
        _ => None,
    };
    Ok(descriptor)
}

/// State attribute when present, otherwise inferred from the link label.
fn current_state<P: Page>(
    page: &P,
    element: &P::Node,
    attribute: &str,
    from_label: impl Fn(&str) -> bool,
) -> bool {
    page.attribute(element, attribute)
        .and_then(|value| parse_bool_attr(&value))
        .unwrap_or_else(|| from_label(&page.text(element)))
}

pub fn confirm_message(descriptor: &ActionDescriptor, config: &RowActionsConfig) -> String {
    if let Some(message) = &descriptor.confirm_message {
        return message.clone();
    }

    match descriptor.kind {
        ActionKind::StatusToggle => {
            "Are you sure you want to change the status of this item?".to_string()
        }
        ActionKind::ApprovalToggle => {
            if descriptor.current_state.unwrap_or(false) {
                "Are you sure you want to unapprove this user? They will lose access until approved again."
                    .to_string()
            } else {
                "Are you sure you want to approve this user?".to_string()
            }
        }
        ActionKind::PasswordReset => format!(
            "Are you sure you want to reset this user's password? The new password will be: {}",
            config.default_password
        ),
        ActionKind::Delete => format!(
            "Are you sure you want to delete this {}? This action cannot be undone.",
            descriptor.item_label()
        ),
        ActionKind::GenericConfirm => String::new(),
    }
}
