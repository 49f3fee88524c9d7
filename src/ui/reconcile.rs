use crate::config::{Selectors, Timing};
use crate::models::{ActionResult, NewStatus};

use super::fragment;
use super::page::{Deferred, Page, Selector};

pub const ACTIVE_STATE_ATTR: &str = "data-is-active";
pub const APPROVED_STATE_ATTR: &str = "data-is-approved";
/// Set on a row while it slides out; clicks inside it are ignored.
pub const REMOVING_ATTR: &str = "data-row-removing";

const DEACTIVATE_ICON: &str = "fas fa-toggle-on me-2 text-warning";
const ACTIVATE_ICON: &str = "fas fa-toggle-off me-2 text-success";
const UNAPPROVE_ICON: &str = "fas fa-user-times me-2 text-warning";
const APPROVE_ICON: &str = "fas fa-user-check me-2 text-success";

/// Flip the status link locally and copy the server's badge into the row.
///
/// Returns the active state the link now advertises.
pub fn apply_status_toggle<P: Page>(
    page: &mut P,
    link: &P::Node,
    row: Option<&P::Node>,
    result: &ActionResult,
    selectors: &Selectors,
    was_active: bool,
) -> bool {
    let now_active = !was_active;
    let (icon, label) = if now_active {
        (DEACTIVATE_ICON, "Deactivate")
    } else {
        (ACTIVATE_ICON, "Activate")
    };
    page.replace_content(link, &fragment::icon_label(icon, label));
    page.set_attribute(link, ACTIVE_STATE_ATTR, bool_attr(now_active));

    if let (Some(row), Some(status)) = (row, result.new_status.as_ref()) {
        write_badge(page, row, &selectors.status_badge_class, status);
    }

    now_active
}

/// Render the approval link and badge from the server's `is_approved`.
pub fn apply_approval_toggle<P: Page>(
    page: &mut P,
    link: &P::Node,
    row: Option<&P::Node>,
    result: &ActionResult,
    selectors: &Selectors,
    was_approved: bool,
) -> bool {
    let approved = result.is_approved.unwrap_or(!was_approved);
    let (icon, label) = if approved {
        (UNAPPROVE_ICON, "Unapprove")
    } else {
        (APPROVE_ICON, "Approve")
    };
    page.replace_content(link, &fragment::icon_label(icon, label));
    page.set_attribute(link, APPROVED_STATE_ATTR, bool_attr(approved));

    if let Some(row) = row {
        let status = result
            .new_status
            .clone()
            .unwrap_or_else(|| NewStatus::approval(approved));
        write_badge(page, row, &selectors.approval_badge_class, &status);
    }

    approved
}

fn write_badge<P: Page>(page: &mut P, row: &P::Node, badge_class: &str, status: &NewStatus) {
    let Some(badge) = page.find_within(row, &Selector::Class(badge_class)) else {
        log::debug!("Row has no .{badge_class} element to update");
        return;
    };

    // Keep the marker class so the badge can be found again.
    page.set_class(&badge, &format!("badge {badge_class} {}", status.class));
    match status.icon.as_deref() {
        Some(icon) => {
            let icon = format!("fas {icon} me-1");
            page.replace_content(&badge, &fragment::icon_label(&icon, &status.text));
        }
        None => page.set_text(&badge, &status.text),
    }
}

/// Start the slide-out; the row is detached once the transition has run.
pub fn begin_row_removal<P: Page>(page: &mut P, row: &P::Node, timing: &Timing) {
    page.set_attribute(row, REMOVING_ATTR, "true");
    page.set_style(
        row,
        "transition",
        &format!("all {}ms ease", timing.row_transition_ms),
    );
    page.set_style(row, "opacity", "0");
    page.set_style(row, "transform", "translateX(-100%)");
    page.schedule(timing.row_transition(), Deferred::DetachRow(row.clone()));
}

/// Remove a faded row. A row that is already gone leaves the count alone.
pub fn detach_row<P: Page>(page: &mut P, row: &P::Node, selectors: &Selectors) {
    if !page.is_connected(row) {
        log::debug!("Row was already detached");
        return;
    }
    page.remove(row);

    if let Some(count) = page.element_by_id(&selectors.count_element_id) {
        let text = page.text(&count);
        match leading_integer(&text) {
            Some(current) => page.set_text(&count, &current.saturating_sub(1).to_string()),
            None => log::warn!(
                "#{} does not start with a number: {text:?}",
                selectors.count_element_id
            ),
        }
    }

    if let Some(body) = page.element_by_id(&selectors.table_body_id) {
        if page.child_count(&body) == 0 {
            page.append(&body, &fragment::empty_row());
        }
    }
}

/// Parse the leading integer of `text` ("12 users" -> 12).
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with('-'));
    let digits = text[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Read a boolean state attribute ("true"/"false", "1"/"0", "yes"/"no").
pub fn parse_bool_attr(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
