use std::cell::{Ref, RefCell, RefMut};

use crate::api::{resolve_token, ActionClient, ApiError, ErrorClass, Transport};
use crate::config::RowActionsConfig;
use crate::events::{self, Dispatch, PendingAction};
use crate::models::{ActionKind, ActionResult};
use crate::state::{InFlight, NotificationLevel, NotificationSlot};
use crate::ui::{notify, reconcile, Deferred, Page};

const MISCONFIGURED_MESSAGE: &str =
    "This action is not configured correctly. Please contact an administrator.";
const MISSING_TOKEN_MESSAGE: &str =
    "Security token not found. Please refresh the page and try again.";
const STATUS_CORRECTED_MESSAGE: &str = "The server adjusted the status to match current activity.";

/// Row action controller for one page.
///
/// All state sits behind `RefCell`s that are only borrowed for the length of
/// a synchronous step, never across the request's await point, so timers and
/// further clicks can run while a request is outstanding.
pub struct RowActions<P: Page, T> {
    config: RowActionsConfig,
    page: RefCell<P>,
    client: ActionClient<T>,
    notifications: RefCell<NotificationSlot<P::Node>>,
    in_flight: RefCell<InFlight>,
}

impl<P: Page, T: Transport> RowActions<P, T> {
    pub fn new(config: RowActionsConfig, page: P, transport: T) -> Self {
        Self {
            config,
            page: RefCell::new(page),
            client: ActionClient::new(transport),
            notifications: RefCell::new(NotificationSlot::new()),
            in_flight: RefCell::new(InFlight::new()),
        }
    }

    pub fn config(&self) -> &RowActionsConfig {
        &self.config
    }

    pub fn page(&self) -> Ref<'_, P> {
        self.page.borrow()
    }

    pub fn page_mut(&self) -> RefMut<'_, P> {
        self.page.borrow_mut()
    }

    pub fn transport(&self) -> &T {
        self.client.transport()
    }

    pub fn in_flight(&self) -> Ref<'_, InFlight> {
        self.in_flight.borrow()
    }

    /// Synchronous half of a click: classify, confirm, mark the row busy.
    ///
    /// Safe to call from inside a DOM event callback; the caller must call
    /// `preventDefault` when [`Dispatch::prevents_default`] says so.
    pub fn dispatch(&self, target: &P::Node) -> Dispatch<P::Node> {
        let dispatch = {
            let mut page = self.page.borrow_mut();
            let in_flight = self.in_flight.borrow();
            events::dispatch(&mut *page, target, &in_flight, &self.config)
        };

        match &dispatch {
            Dispatch::Misconfigured { kind, missing } => {
                log::error!("{kind} action is missing {missing}; no request sent");
                self.notify(MISCONFIGURED_MESSAGE, NotificationLevel::Error);
            }
            Dispatch::Busy(kind) => {
                log::debug!("{kind} ignored: row has a request in flight or is being removed");
            }
            Dispatch::Declined(kind) => {
                log::debug!("{kind} declined by user");
            }
            Dispatch::Run(pending) => {
                self.in_flight
                    .borrow_mut()
                    .begin(pending.descriptor.kind, &pending.descriptor.row_key());
            }
            Dispatch::Ignored | Dispatch::Proceed => {}
        }

        dispatch
    }

    /// Asynchronous half: send the request and reconcile the page.
    pub async fn execute(&self, pending: PendingAction<P::Node>) {
        let descriptor = &pending.descriptor;
        let (token, base_url) = {
            let page = self.page.borrow();
            (resolve_token(&*page, &self.config.selectors), page.base_url())
        };

        let result = self
            .client
            .perform(base_url.as_deref(), &descriptor.target_url, token.as_deref())
            .await;

        let finished = self.in_flight.borrow_mut().finish(&descriptor.row_key());
        if let Some(request) = finished {
            log::debug!(
                "{} for item {} finished in {}ms",
                descriptor.kind,
                descriptor.item_id,
                request.elapsed_ms()
            );
        }

        match result {
            Ok(envelope) if envelope.success => self.on_success(&pending, &envelope),
            Ok(envelope) => {
                log::warn!(
                    "{} for item {} rejected: {:?}",
                    descriptor.kind,
                    descriptor.item_id,
                    envelope.message
                );
                self.notify(
                    envelope.message_or(descriptor.kind.failure_message()),
                    NotificationLevel::Error,
                );
            }
            Err(error) => {
                log::error!(
                    "{} for item {} failed: {error}",
                    descriptor.kind,
                    descriptor.item_id
                );
                let message = error_message(descriptor.kind, &error);
                self.notify(&message, NotificationLevel::Error);
            }
        }
    }

    /// Both halves in one go. Returns whether the default action was prevented.
    pub async fn handle_click(&self, target: &P::Node) -> bool {
        let dispatch = self.dispatch(target);
        let prevented = dispatch.prevents_default();
        if let Dispatch::Run(pending) = dispatch {
            self.execute(pending).await;
        }
        prevented
    }

    /// Run a task whose timer has fired.
    pub fn run_deferred(&self, task: Deferred<P::Node>) {
        let mut page = self.page.borrow_mut();
        match task {
            Deferred::FadeNotification(id) => {
                let mut slot = self.notifications.borrow_mut();
                notify::fade(&mut *page, &mut slot, &self.config.timing, id);
            }
            Deferred::RemoveNotification(id) => {
                let mut slot = self.notifications.borrow_mut();
                notify::dismiss(&mut *page, &mut slot, id);
            }
            Deferred::DetachRow(row) => {
                reconcile::detach_row(&mut *page, &row, &self.config.selectors);
            }
            Deferred::Reload => {
                log::info!("Reloading page to pick up server state");
                page.reload();
            }
        }
    }

    pub fn notify(&self, message: &str, level: NotificationLevel) {
        let mut page = self.page.borrow_mut();
        let mut slot = self.notifications.borrow_mut();
        notify::show(&mut *page, &mut slot, &self.config.timing, message, level);
    }

    fn on_success(&self, pending: &PendingAction<P::Node>, envelope: &ActionResult) {
        let descriptor = &pending.descriptor;
        let timing = &self.config.timing;
        let selectors = &self.config.selectors;

        match descriptor.kind {
            ActionKind::StatusToggle => {
                let was_active = descriptor.current_state.unwrap_or(false);
                let now_active = reconcile::apply_status_toggle(
                    &mut *self.page.borrow_mut(),
                    &pending.link,
                    pending.row.as_ref(),
                    envelope,
                    selectors,
                    was_active,
                );
                if envelope.is_active.is_some_and(|active| active != now_active) {
                    log::warn!(
                        "Item {} reported is_active={:?} after toggling to {now_active}",
                        descriptor.item_id,
                        envelope.is_active
                    );
                }

                if envelope.was_corrected() {
                    self.notify(
                        envelope.message_or(STATUS_CORRECTED_MESSAGE),
                        NotificationLevel::Warning,
                    );
                } else {
                    self.notify(descriptor.kind.success_message(), NotificationLevel::Success);
                }
                self.schedule_reload();
            }
            ActionKind::ApprovalToggle => {
                let was_approved = descriptor.current_state.unwrap_or(false);
                let approved = reconcile::apply_approval_toggle(
                    &mut *self.page.borrow_mut(),
                    &pending.link,
                    pending.row.as_ref(),
                    envelope,
                    selectors,
                    was_approved,
                );
                let message = if approved {
                    "User approved successfully"
                } else {
                    "User approval revoked"
                };
                self.notify(message, NotificationLevel::Success);
                self.schedule_reload();
            }
            ActionKind::PasswordReset => {
                let password = envelope
                    .default_password
                    .as_deref()
                    .filter(|password| !password.is_empty())
                    .unwrap_or(self.config.default_password.as_str())
                    .to_string();
                self.page.borrow_mut().copy_to_clipboard(&password);
                self.notify(
                    &format!("Password has been reset. New password: {password}"),
                    NotificationLevel::Success,
                );
            }
            ActionKind::Delete => {
                match &pending.row {
                    Some(row) => {
                        reconcile::begin_row_removal(&mut *self.page.borrow_mut(), row, timing)
                    }
                    None => log::warn!(
                        "Deleted item {} has no enclosing row to remove",
                        descriptor.item_id
                    ),
                }
                self.notify(descriptor.kind.success_message(), NotificationLevel::Success);
            }
            ActionKind::GenericConfirm => {}
        }
    }

    fn schedule_reload(&self) {
        if self.config.timing.reload_after_toggle {
            self.page
                .borrow_mut()
                .schedule(self.config.timing.reload_delay(), Deferred::Reload);
        }
    }
}

/// User-facing text for a request that produced no usable envelope.
pub fn error_message(kind: ActionKind, error: &ApiError) -> String {
    match error {
        ApiError::MissingToken => MISSING_TOKEN_MESSAGE.to_string(),
        ApiError::ServerError {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::ServerError {
            status,
            message: None,
        } => format!("Server error ({status}). Please try again later."),
        _ if error.class() == ErrorClass::Configuration => MISCONFIGURED_MESSAGE.to_string(),
        _ => kind.error_message().to_string(),
    }
}
