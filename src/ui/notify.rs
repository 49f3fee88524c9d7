use uuid::Uuid;

use crate::config::Timing;
use crate::state::{NotificationLevel, NotificationSlot};

use super::fragment::{self, NOTIFICATION_CLASS};
use super::page::{Deferred, Page, Selector};

/// Show `message`, evicting whatever notification is on screen.
pub fn show<P: Page>(
    page: &mut P,
    slot: &mut NotificationSlot<P::Node>,
    timing: &Timing,
    message: &str,
    level: NotificationLevel,
) -> Option<Uuid> {
    for stale in page.query_all(&Selector::Class(NOTIFICATION_CLASS)) {
        page.remove(&stale);
    }
    slot.clear();

    let Some(node) = page.append_to_body(&fragment::notification(level, message)) else {
        log::warn!("Could not render {level} notification: {message}");
        return None;
    };

    let id = slot.replace(node, level);
    page.schedule(timing.notification_timeout(), Deferred::FadeNotification(id));
    Some(id)
}

/// First dismissal phase: make it transparent, then remove after the fade.
pub fn fade<P: Page>(page: &mut P, slot: &mut NotificationSlot<P::Node>, timing: &Timing, id: Uuid) {
    let Some(node) = slot.get(id).map(|live| live.node.clone()) else {
        return;
    };
    if !page.is_connected(&node) {
        slot.clear();
        return;
    }
    page.set_style(&node, "opacity", "0");
    page.schedule(timing.notification_fade(), Deferred::RemoveNotification(id));
}

pub fn dismiss<P: Page>(page: &mut P, slot: &mut NotificationSlot<P::Node>, id: Uuid) {
    if let Some(live) = slot.take(id) {
        if page.is_connected(&live.node) {
            page.remove(&live.node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::headless::HeadlessPage;

    #[test]
    fn test_second_notification_evicts_first() {
        let mut page = HeadlessPage::new();
        let mut slot = NotificationSlot::new();
        let timing = Timing::default();

        show(&mut page, &mut slot, &timing, "first", NotificationLevel::Info);
        show(&mut page, &mut slot, &timing, "second", NotificationLevel::Error);

        let toasts = page.query_all(&Selector::Class(NOTIFICATION_CLASS));
        assert_eq!(toasts.len(), 1);
        assert_eq!(page.text(&toasts[0]), "second");
        assert!(page
            .attribute(&toasts[0], "class")
            .unwrap()
            .contains("alert-danger"));
    }

    #[test]
    fn test_fade_then_remove() {
        let mut page = HeadlessPage::new();
        let mut slot = NotificationSlot::new();
        let timing = Timing::default();

        let id = show(&mut page, &mut slot, &timing, "saved", NotificationLevel::Success).unwrap();
        let node = slot.current().unwrap().node;
        let scheduled = page.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].delay, timing.notification_timeout());

        fade(&mut page, &mut slot, &timing, id);
        assert_eq!(page.style(node, "opacity"), Some("0"));
        assert!(page.is_connected(&node));
        let scheduled = page.take_scheduled();
        assert_eq!(scheduled[0].delay, timing.notification_fade());

        dismiss(&mut page, &mut slot, id);
        assert!(!page.is_connected(&node));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_stale_timer_leaves_newer_notification_alone() {
        let mut page = HeadlessPage::new();
        let mut slot = NotificationSlot::new();
        let timing = Timing::default();

        let old = show(&mut page, &mut slot, &timing, "old", NotificationLevel::Info).unwrap();
        show(&mut page, &mut slot, &timing, "new", NotificationLevel::Info);
        let live = slot.current().unwrap().node;

        fade(&mut page, &mut slot, &timing, old);
        dismiss(&mut page, &mut slot, old);

        assert!(page.is_connected(&live));
        assert_eq!(page.style(live, "opacity"), None);
    }
}
