/*!
 * System API
 * Cloneable handle consumers use to reach every system service
 */

use serde_json::Value;

use super::builder::SystemBuilder;
use super::types::SystemState;
use crate::apps::AppRegistry;
use crate::core::config::SystemConfig;
use crate::core::types::{now_millis, BatteryState, NetworkState};
use crate::system::{
    Clipboard, ClipboardContent, EventBus, FsChange, NotificationCenter, NotificationId, Severity,
    Subscription, SystemEvent, SystemNotification, Topic, WindowManager,
};
use crate::vfs::{MemFS, SimulatedFS};

/// API facade over the simulated system
///
/// Cheap to clone; every clone talks to the same services.
#[derive(Clone)]
pub struct SystemApi {
    pub(super) fs: SimulatedFS<MemFS>,
    pub(super) windows: WindowManager,
    pub(super) bus: EventBus,
    pub(super) notifications: NotificationCenter,
    pub(super) clipboard: Clipboard,
    pub(super) config: SystemConfig,
}

impl SystemApi {
    /// Boot a system with the built-in apps and the seeded drive
    pub fn new(config: SystemConfig) -> Self {
        SystemBuilder::new(config).build()
    }

    pub fn builder(config: SystemConfig) -> SystemBuilder {
        SystemBuilder::new(config)
    }

    pub fn file_system(&self) -> &SimulatedFS<MemFS> {
        &self.fs
    }

    pub fn registry(&self) -> &AppRegistry {
        self.windows.registry()
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // --- Messaging ---

    /// Send arbitrary data on a named channel
    pub fn broadcast(&self, channel: &str, data: Value) -> usize {
        self.bus.publish(SystemEvent::Message {
            channel: channel.to_string(),
            data,
        })
    }

    /// Receive data broadcast on a named channel
    pub fn subscribe<F>(&self, channel: &str, callback: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.bus.subscribe(Topic::channel(channel), move |event| {
            if let Some(data) = event.message_data() {
                callback(data);
            }
        })
    }

    pub fn subscribe_to_file_system_changes<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&FsChange) + Send + Sync + 'static,
    {
        self.bus.subscribe(Topic::FileSystem, move |event| {
            if let Some(change) = event.as_fs_change() {
                callback(change);
            }
        })
    }

    pub(super) fn publish_fs_change(&self, change: FsChange) {
        self.bus.publish(SystemEvent::FileSystem(change));
    }

    // --- Notifications ---

    /// Post a toast; `title` falls back to the severity's default
    pub fn notify(&self, severity: Severity, message: &str, title: Option<&str>) -> NotificationId {
        let title = title.unwrap_or_else(|| severity.default_title());
        self.notifications.add(severity, title, message)
    }

    pub fn info(&self, message: &str, title: Option<&str>) -> NotificationId {
        self.notify(Severity::Info, message, title)
    }

    pub fn warn(&self, message: &str, title: Option<&str>) -> NotificationId {
        self.notify(Severity::Warning, message, title)
    }

    pub fn error(&self, message: &str, title: Option<&str>) -> NotificationId {
        self.notify(Severity::Error, message, title)
    }

    pub fn success(&self, message: &str, title: Option<&str>) -> NotificationId {
        self.notify(Severity::Success, message, title)
    }

    pub fn notifications(&self) -> Vec<SystemNotification> {
        self.notifications.active()
    }

    pub fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.notifications.remove(id)
    }

    // --- Clipboard ---

    pub fn read_clipboard(&self) -> Option<ClipboardContent> {
        self.clipboard.read()
    }

    pub fn write_clipboard(&self, content: Option<ClipboardContent>) {
        self.clipboard.write(content)
    }

    // --- System state ---

    pub fn system_state(&self) -> SystemState {
        SystemState {
            time: now_millis(),
            clipboard: self.clipboard.read(),
            battery: BatteryState {
                level: self.config.battery_level,
                charging: false,
            },
            network: NetworkState {
                connected: true,
                kind: self.config.network_kind,
            },
        }
    }
}

impl std::fmt::Debug for SystemApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemApi")
            .field("windows", &self.windows)
            .field("notifications", &self.notifications)
            .field("clipboard", &self.clipboard)
            .finish()
    }
}
