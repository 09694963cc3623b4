/*!
 * Clipboard
 * Single process-wide slot for copied text, files and folders
 */

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::bus::{EventBus, SystemEvent};
use crate::core::errors::{ClipboardError, ClipboardResult};
use crate::vfs::{FileSystemNode, NodeKind, VfsPath};

/// Clipboard payload kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardKind {
    Text,
    File,
    Folder,
}

impl From<NodeKind> for ClipboardKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => ClipboardKind::File,
            NodeKind::Folder => ClipboardKind::Folder,
        }
    }
}

/// Clipboard slot contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardContent {
    pub kind: ClipboardKind,
    /// Text payload, or the source path for files and folders
    pub data: String,
    #[serde(rename = "isCut", default)]
    pub is_cut: bool,
}

impl ClipboardContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ClipboardKind::Text,
            data: text.into(),
            is_cut: false,
        }
    }

    /// Entry referring to a file-system item
    pub fn item(path: &VfsPath, node: &FileSystemNode, is_cut: bool) -> Self {
        Self {
            kind: node.kind().into(),
            data: path.to_string(),
            is_cut,
        }
    }

    /// Source path of a file or folder entry
    pub fn source_path(&self) -> ClipboardResult<VfsPath> {
        if self.kind == ClipboardKind::Text {
            return Err(ClipboardError::InvalidItem("text cannot be pasted as an item".into()));
        }
        VfsPath::parse(&self.data).map_err(|e| ClipboardError::InvalidItem(e.to_string()))
    }
}

/// Shared clipboard
///
/// Each write replaces the slot and is published on the clipboard topic.
#[derive(Clone)]
pub struct Clipboard {
    slot: Arc<RwLock<Option<ClipboardContent>>>,
    bus: EventBus,
}

impl Clipboard {
    pub fn new(bus: EventBus) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            bus,
        }
    }

    pub fn read(&self) -> Option<ClipboardContent> {
        self.slot.read().clone()
    }

    /// Replace the slot (`None` clears it)
    pub fn write(&self, content: Option<ClipboardContent>) {
        *self.slot.write() = content.clone();
        debug!(
            kind = ?content.as_ref().map(|c| c.kind),
            cut = content.as_ref().map(|c| c.is_cut).unwrap_or(false),
            "Clipboard updated"
        );
        self.bus.publish(SystemEvent::Clipboard(content));
    }

    pub fn clear(&self) {
        self.write(None);
    }

    /// Current contents or `ClipboardError::Empty`
    pub fn require(&self) -> ClipboardResult<ClipboardContent> {
        self.read().ok_or(ClipboardError::Empty)
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("content", &*self.slot.read())
            .finish()
    }
}
