/*!
 * File System Node Types
 * Files and folders of the simulated drive
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::SystemTime;

/// Node kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Folder => write!(f, "folder"),
        }
    }
}

/// What a whole-file write did to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The path was absent
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum NodeBody {
    File {
        /// Opaque text, may hold base64 for binary payloads
        content: String,
        /// Byte length of `content` at write time
        size: usize,
    },
    Folder {
        /// Keyed by each child's own name
        children: BTreeMap<String, FileSystemNode>,
    },
}

/// A file or folder in the simulated drive
///
/// Values handed out by the file system are snapshots; mutating them does
/// not touch the live tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemNode {
    name: String,
    modified: SystemTime,
    #[serde(flatten)]
    body: NodeBody,
}

impl FileSystemNode {
    /// New file node; size is derived from the content
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            modified: SystemTime::now(),
            body: NodeBody::File {
                size: content.len(),
                content,
            },
        }
    }

    /// New empty folder node
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modified: SystemTime::now(),
            body: NodeBody::Folder {
                children: BTreeMap::new(),
            },
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self.body, NodeBody::File { .. })
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self.body, NodeBody::Folder { .. })
    }

    /// File content, `None` for folders
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { content, .. } => Some(content),
            NodeBody::Folder { .. } => None,
        }
    }

    /// File size in bytes, `None` for folders
    pub fn size(&self) -> Option<usize> {
        match &self.body {
            NodeBody::File { size, .. } => Some(*size),
            NodeBody::Folder { .. } => None,
        }
    }

    /// Children ordered by name, `None` for files
    pub fn children(&self) -> Option<impl Iterator<Item = &FileSystemNode>> {
        match &self.body {
            NodeBody::Folder { children } => Some(children.values()),
            NodeBody::File { .. } => None,
        }
    }

    pub fn child(&self, name: &str) -> Option<&FileSystemNode> {
        match &self.body {
            NodeBody::Folder { children } => children.get(name),
            NodeBody::File { .. } => None,
        }
    }

    /// Number of direct children (0 for files)
    pub fn child_count(&self) -> usize {
        match &self.body {
            NodeBody::Folder { children } => children.len(),
            NodeBody::File { .. } => 0,
        }
    }

    pub(in crate::vfs) fn child_mut(&mut self, name: &str) -> Option<&mut FileSystemNode> {
        match &mut self.body {
            NodeBody::Folder { children } => children.get_mut(name),
            NodeBody::File { .. } => None,
        }
    }

    /// Insert a child keyed by its own name, touching this folder
    ///
    /// Returns the child back if this node is a file.
    pub(in crate::vfs) fn insert_child(
        &mut self,
        child: FileSystemNode,
    ) -> Result<(), FileSystemNode> {
        match &mut self.body {
            NodeBody::Folder { children } => {
                children.insert(child.name.clone(), child);
                self.modified = SystemTime::now();
                Ok(())
            }
            NodeBody::File { .. } => Err(child),
        }
    }

    /// Detach a child by name, touching this folder
    pub(in crate::vfs) fn remove_child(&mut self, name: &str) -> Option<FileSystemNode> {
        match &mut self.body {
            NodeBody::Folder { children } => {
                let removed = children.remove(name);
                if removed.is_some() {
                    self.modified = SystemTime::now();
                }
                removed
            }
            NodeBody::File { .. } => None,
        }
    }

    /// Replace file content and refresh size/modified
    pub(in crate::vfs) fn set_content(&mut self, new_content: String) -> bool {
        match &mut self.body {
            NodeBody::File { content, size } => {
                *size = new_content.len();
                *content = new_content;
                self.modified = SystemTime::now();
                true
            }
            NodeBody::Folder { .. } => false,
        }
    }

    pub(in crate::vfs) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.modified = SystemTime::now();
    }

    /// Deep copy with the root renamed and every node's timestamp refreshed
    pub(in crate::vfs) fn deep_copy_as(&self, name: &str) -> FileSystemNode {
        let mut copy = self.fresh_copy();
        copy.name = name.to_string();
        copy
    }

    fn fresh_copy(&self) -> FileSystemNode {
        let body = match &self.body {
            NodeBody::File { content, size } => NodeBody::File {
                content: content.clone(),
                size: *size,
            },
            NodeBody::Folder { children } => NodeBody::Folder {
                children: children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.fresh_copy()))
                    .collect(),
            },
        };
        FileSystemNode {
            name: self.name.clone(),
            modified: SystemTime::now(),
            body,
        }
    }

    /// Builder-style child insertion used when seeding a tree
    pub(in crate::vfs) fn with_child(mut self, child: FileSystemNode) -> Self {
        if let NodeBody::Folder { children } = &mut self.body {
            children.insert(child.name.clone(), child);
        }
        self
    }
}
