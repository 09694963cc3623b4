/*!
 * Event Bus Types
 * Topics and the typed payloads published on them
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{now_millis, Timestamp};
use crate::system::clipboard::ClipboardContent;
use crate::system::notifications::SystemNotification;
use crate::vfs::VfsPath;

/// Subscription handle id
pub type SubscriptionId = u64;

/// Pub/sub topic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "topic", content = "name", rename_all = "snake_case")]
pub enum Topic {
    /// File-system change events
    FileSystem,
    /// Toast notifications added or removed
    Notifications,
    /// Clipboard writes
    Clipboard,
    /// Named broadcast channel for inter-app messages
    Channel(String),
}

impl Topic {
    pub fn channel(name: impl Into<String>) -> Self {
        Self::Channel(name.into())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::FileSystem => write!(f, "fileSystemChange"),
            Topic::Notifications => write!(f, "notifications"),
            Topic::Clipboard => write!(f, "clipboard"),
            Topic::Channel(name) => write!(f, "channel:{}", name),
        }
    }
}

/// What happened to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FsChangeKind {
    Created,
    Modified,
    Deleted,
    Renamed,
    Moved,
    Copied,
}

/// File-system change notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsChange {
    pub path: VfsPath,
    pub kind: FsChangeKind,
    pub timestamp: Timestamp,
}

impl FsChange {
    pub fn new(path: VfsPath, kind: FsChangeKind) -> Self {
        Self {
            path,
            kind,
            timestamp: now_millis(),
        }
    }

    /// Whether a view showing `dir` should reload
    ///
    /// True when the change is at or below `dir`, or when `dir` lies under
    /// the folder that contains the changed path.
    pub fn affects_directory(&self, dir: &VfsPath) -> bool {
        if self.path.starts_with(dir) {
            return true;
        }
        let changed_dir = self.path.parent().unwrap_or_else(VfsPath::root);
        dir.starts_with(&changed_dir)
    }
}

/// Toast lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationEvent {
    Added(SystemNotification),
    Removed { id: u64 },
}

/// Everything that travels over the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SystemEvent {
    FileSystem(FsChange),
    Notification(NotificationEvent),
    Clipboard(Option<ClipboardContent>),
    Message {
        channel: String,
        data: serde_json::Value,
    },
}

impl SystemEvent {
    /// Topic this event is delivered on
    pub fn topic(&self) -> Topic {
        match self {
            SystemEvent::FileSystem(_) => Topic::FileSystem,
            SystemEvent::Notification(_) => Topic::Notifications,
            SystemEvent::Clipboard(_) => Topic::Clipboard,
            SystemEvent::Message { channel, .. } => Topic::Channel(channel.clone()),
        }
    }

    pub fn as_fs_change(&self) -> Option<&FsChange> {
        match self {
            SystemEvent::FileSystem(change) => Some(change),
            _ => None,
        }
    }

    /// Broadcast payload for channel messages
    pub fn message_data(&self) -> Option<&serde_json::Value> {
        match self {
            SystemEvent::Message { data, .. } => Some(data),
            _ => None,
        }
    }
}
