use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Bootstrap alert modifier.
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "alert-info",
            NotificationLevel::Success => "alert-success",
            NotificationLevel::Warning => "alert-warning",
            NotificationLevel::Error => "alert-danger",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "fas fa-info-circle",
            NotificationLevel::Success => "fas fa-check-circle",
            NotificationLevel::Warning => "fas fa-exclamation-triangle",
            NotificationLevel::Error => "fas fa-exclamation-circle",
        }
    }
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Warning => write!(f, "warning"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiveNotification<N> {
    pub id: Uuid,
    pub node: N,
    pub level: NotificationLevel,
    pub shown_at: DateTime<Utc>,
}

/// The single notification currently on screen.
#[derive(Debug, Clone)]
pub struct NotificationSlot<N> {
    current: Option<LiveNotification<N>>,
}

impl<N> Default for NotificationSlot<N> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<N: Clone> NotificationSlot<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupy the slot with a freshly rendered notification, dropping the previous one.
    pub fn replace(&mut self, node: N, level: NotificationLevel) -> Uuid {
        let id = Uuid::new_v4();
        self.current = Some(LiveNotification {
            id,
            node,
            level,
            shown_at: Utc::now(),
        });
        id
    }

    pub fn current(&self) -> Option<&LiveNotification<N>> {
        self.current.as_ref()
    }

    /// The live notification, but only if it is still the one identified by `id`.
    pub fn get(&self, id: Uuid) -> Option<&LiveNotification<N>> {
        self.current.as_ref().filter(|live| live.id == id)
    }

    pub fn take(&mut self, id: Uuid) -> Option<LiveNotification<N>> {
        if self.get(id).is_some() {
            self.current.take()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_supersedes_previous_id() {
        let mut slot = NotificationSlot::new();
        let first = slot.replace(1usize, NotificationLevel::Info);
        let second = slot.replace(2usize, NotificationLevel::Error);

        assert!(slot.get(first).is_none());
        let live = slot.get(second).unwrap();
        assert_eq!(live.node, 2);
        assert_eq!(live.level, NotificationLevel::Error);
    }

    #[test]
    fn test_take_ignores_stale_id() {
        let mut slot = NotificationSlot::new();
        let stale = slot.replace("a", NotificationLevel::Success);
        let fresh = slot.replace("b", NotificationLevel::Success);

        assert!(slot.take(stale).is_none());
        assert!(slot.current().is_some());
        assert_eq!(slot.take(fresh).map(|live| live.node), Some("b"));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_level_table() {
        assert_eq!(NotificationLevel::Error.alert_class(), "alert-danger");
        assert_eq!(NotificationLevel::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(NotificationLevel::Warning.icon_class(), "fas fa-exclamation-triangle");
        assert_eq!(NotificationLevel::Info.icon_class(), "fas fa-info-circle");
    }
}
