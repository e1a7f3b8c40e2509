//! Single-slot transient message shown after an operation completes.

use std::time::{Duration, Instant};

use shared::domain::Severity;

pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Holds at most one message. A new message replaces the current one.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    slot: Option<Notification>,
    auto_dismiss: Duration,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_DISMISS)
    }
}

impl NotificationChannel {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            slot: None,
            auto_dismiss,
        }
    }

    pub fn auto_dismiss(&self) -> Duration {
        self.auto_dismiss
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> &Notification {
        self.notify_at(message, severity, Instant::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> &Notification {
        self.slot.insert(Notification {
            message: message.into(),
            severity,
            raised_at: now,
        })
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }

    /// The message still visible at `now`, if any.
    pub fn active(&self, now: Instant) -> Option<&Notification> {
        self.slot
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.raised_at) < self.auto_dismiss)
    }

    /// Clears an expired message. Returns true when one was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.slot.is_some() && self.active(now).is_none() {
            self.slot = None;
            return true;
        }
        false
    }

    /// Last message regardless of expiry.
    pub fn latest(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }
}
