/*!
 * Notification Center
 * Toast notifications with automatic expiry
 */

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use super::bus::{EventBus, NotificationEvent, SystemEvent};
use crate::core::id::{AtomicGenerator, IdGenerator};
use crate::core::types::{now_millis, Timestamp};

/// Notification id
pub type NotificationId = u64;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    /// Title used when the caller does not supply one
    pub const fn default_title(self) -> &'static str {
        match self {
            Severity::Info => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Success => "Success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        };
        f.write_str(label)
    }
}

/// One toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemNotification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: Timestamp,
}

#[derive(Debug)]
struct Entry {
    notification: SystemNotification,
    expires_at: Instant,
}

struct CenterInner {
    entries: RwLock<Vec<Entry>>,
    ids: AtomicGenerator,
    ttl: Duration,
    bus: EventBus,
}

/// Active toasts, oldest first
///
/// Expiry is scheduled on the tokio runtime when one is running; expired
/// entries are also dropped on every read, so the list stays correct without
/// a runtime.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<CenterInner>,
}

impl NotificationCenter {
    pub fn new(bus: EventBus, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(CenterInner {
                entries: RwLock::new(Vec::new()),
                ids: AtomicGenerator::default(),
                ttl,
                bus,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    /// Add a toast and schedule its removal
    pub fn add(
        &self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        let notification = SystemNotification {
            id: self.inner.ids.next(),
            severity,
            title: title.into(),
            message: message.into(),
            timestamp: now_millis(),
        };
        let id = notification.id;

        self.inner.entries.write().push(Entry {
            notification: notification.clone(),
            expires_at: Instant::now() + self.inner.ttl,
        });
        info!(
            id,
            severity = %notification.severity,
            title = %notification.title,
            "{}",
            notification.message
        );

        self.inner
            .bus
            .publish(SystemEvent::Notification(NotificationEvent::Added(notification)));
        self.schedule_expiry(id);
        id
    }

    fn schedule_expiry(&self, id: NotificationId) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let center: Weak<CenterInner> = Arc::downgrade(&self.inner);
        let ttl = self.inner.ttl;
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(inner) = center.upgrade() {
                NotificationCenter { inner }.remove(id);
            }
        });
    }

    /// Remove a toast; false if it was already gone
    pub fn remove(&self, id: NotificationId) -> bool {
        let removed = {
            let mut entries = self.inner.entries.write();
            let before = entries.len();
            entries.retain(|e| e.notification.id != id);
            entries.len() != before
        };

        if removed {
            debug!(id, "Notification removed");
            self.inner
                .bus
                .publish(SystemEvent::Notification(NotificationEvent::Removed { id }));
        }
        removed
    }

    /// Snapshot of unexpired toasts
    pub fn active(&self) -> Vec<SystemNotification> {
        self.purge_expired();
        self.inner
            .entries
            .read()
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn purge_expired(&self) {
        let now = Instant::now();
        let expired: Vec<NotificationId> = {
            let mut entries = self.inner.entries.write();
            let expired = entries
                .iter()
                .filter(|e| e.expires_at <= now)
                .map(|e| e.notification.id)
                .collect();
            entries.retain(|e| e.expires_at > now);
            expired
        };

        for id in expired {
            self.inner
                .bus
                .publish(SystemEvent::Notification(NotificationEvent::Removed { id }));
        }
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("active", &self.inner.entries.read().len())
            .field("ttl", &self.inner.ttl)
            .finish()
    }
}
