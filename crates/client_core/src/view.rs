//! Per-view state: one list, one form, one notification slot, one busy flag.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use shared::{
    domain::{RecordId, ResourceKind, Severity},
    error::{DirectoryError, WriteOp},
    protocol::DirectoryRecord,
};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::{
    form::{FormFields, RecordForm},
    list::{write_failure_message, write_success_message, ListController, LOAD_FAILED_MESSAGE},
    notification::{Notification, NotificationChannel},
    transport::RecordApi,
};

const VIEW_EVENT_CAPACITY: usize = 256;
pub const NOT_FOUND_MESSAGE: &str = "Entry not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    BusyChanged(bool),
    Loaded {
        kind: ResourceKind,
        count: usize,
    },
    LoadFailed {
        kind: ResourceKind,
        message: String,
    },
    RecordCreated {
        kind: ResourceKind,
        id: RecordId,
    },
    RecordUpdated {
        kind: ResourceKind,
        id: RecordId,
    },
    RecordRemoved {
        kind: ResourceKind,
        id: RecordId,
    },
    Notified {
        severity: Severity,
        message: String,
    },
    DialogOpened {
        editing: Option<RecordId>,
    },
    DialogClosed,
}

pub struct ViewState<F: FormFields> {
    list: ListController<F::Record>,
    form: RecordForm<F>,
    notification: NotificationChannel,
    dialog_open: bool,
    busy: bool,
    events: broadcast::Sender<ViewEvent>,
}

impl<F: FormFields> ViewState<F> {
    pub fn new(api: Arc<dyn RecordApi<F::Record>>, fields: F, auto_dismiss: Duration) -> Self {
        let (events, _) = broadcast::channel(VIEW_EVENT_CAPACITY);
        Self {
            list: ListController::new(api),
            form: RecordForm::new(fields),
            notification: NotificationChannel::new(auto_dismiss),
            dialog_open: false,
            busy: false,
            events,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        <F::Record as DirectoryRecord>::KIND
    }

    pub fn list(&self) -> &ListController<F::Record> {
        &self.list
    }

    pub fn form(&self) -> &RecordForm<F> {
        &self.form
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    /// Notification still visible now.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.active(Instant::now())
    }

    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification.active(now)
    }

    /// Last raised notification regardless of auto-dismiss. Cleared only by
    /// an explicit dismiss.
    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notification.latest()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    /// Fetches the collection. Safe to call again as a retry.
    pub async fn load(&mut self) -> bool {
        self.set_busy(true);
        let result = self.list.load().await;
        self.set_busy(false);

        match result {
            Ok(count) => {
                self.emit(ViewEvent::Loaded {
                    kind: self.kind(),
                    count,
                });
                true
            }
            Err(_) => {
                self.emit(ViewEvent::LoadFailed {
                    kind: self.kind(),
                    message: LOAD_FAILED_MESSAGE.to_string(),
                });
                false
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.begin(None);
        self.dialog_open = true;
        self.emit(ViewEvent::DialogOpened { editing: None });
    }

    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.list.get(id) else {
            let err = DirectoryError::NotFound {
                kind: self.kind(),
                id: id.clone(),
            };
            warn!(error = %err, "edit requested for missing record");
            self.notify(NOT_FOUND_MESSAGE, Severity::Error);
            return false;
        };
        self.form.begin(Some(record));
        self.dialog_open = true;
        self.emit(ViewEvent::DialogOpened {
            editing: Some(id.clone()),
        });
        true
    }

    pub fn close_dialog(&mut self) {
        if self.dialog_open {
            self.dialog_open = false;
            self.emit(ViewEvent::DialogClosed);
        }
    }

    pub fn set_field(&mut self, field: F::Field, value: &str) {
        self.form.set(field, value);
    }

    /// Whether the submit action is currently enabled.
    pub fn can_submit(&self) -> bool {
        !self.busy && self.form.can_submit()
    }

    /// Payload the form would submit right now.
    pub fn validate(&self) -> Result<<F::Record as DirectoryRecord>::Draft, DirectoryError> {
        Ok(self.form.validate()?)
    }

    /// Creates or updates depending on the bound id. The dialog closes only
    /// when the server confirms the write.
    pub async fn submit(&mut self) -> bool {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(err) => {
                debug!(
                    kind = %self.kind(),
                    code = ?err.code(),
                    error = %err,
                    "submit blocked by form validation"
                );
                let message = match err {
                    DirectoryError::Validation(form) => form.to_string(),
                    other => other.to_string(),
                };
                self.notify(message, Severity::Error);
                return false;
            }
        };

        let editing = self.form.editing_id().cloned();
        let op = if editing.is_some() {
            WriteOp::Update
        } else {
            WriteOp::Create
        };

        self.set_busy(true);
        let result = match &editing {
            Some(id) => self.list.update(id, &draft).await.map(|()| id.clone()),
            None => self.list.create(&draft).await,
        };
        self.set_busy(false);

        match result {
            Ok(id) => {
                let kind = self.kind();
                self.emit(match op {
                    WriteOp::Update => ViewEvent::RecordUpdated { kind, id },
                    _ => ViewEvent::RecordCreated { kind, id },
                });
                self.notify(write_success_message(op), Severity::Success);
                self.close_dialog();
                true
            }
            Err(_) => {
                self.notify(write_failure_message(op), Severity::Error);
                false
            }
        }
    }

    pub async fn remove(&mut self, id: &RecordId) -> bool {
        self.set_busy(true);
        let result = self.list.remove(id).await;
        self.set_busy(false);

        match result {
            Ok(()) => {
                self.emit(ViewEvent::RecordRemoved {
                    kind: self.kind(),
                    id: id.clone(),
                });
                self.notify(write_success_message(WriteOp::Delete), Severity::Success);
                true
            }
            Err(_) => {
                self.notify(write_failure_message(WriteOp::Delete), Severity::Error);
                false
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        self.notification.notify(message.clone(), severity);
        self.emit(ViewEvent::Notified { severity, message });
    }

    fn set_busy(&mut self, busy: bool) {
        if self.busy != busy {
            self.busy = busy;
            self.emit(ViewEvent::BusyChanged(busy));
        }
    }

    fn emit(&self, event: ViewEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
