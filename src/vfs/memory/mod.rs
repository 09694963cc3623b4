/*!
 * In-Memory Filesystem Backend
 * The simulated drive: a single tree guarded by one lock
 */

mod dir_ops;
mod file_ops;
mod metadata_ops;
mod transfer_ops;

use parking_lot::RwLock;
use std::sync::Arc;

use super::init::seeded_drive;
use super::traits::FileSystem;
use super::types::*;
use crate::core::limits::DRIVE;

/// In-memory filesystem implementation
///
/// Every operation takes the tree lock once and runs to completion under
/// it, so compound operations (rename, move) are atomic to observers.
#[derive(Debug, Clone)]
pub struct MemFS {
    pub(super) root: Arc<RwLock<FileSystemNode>>,
}

impl MemFS {
    /// Create an empty drive
    pub fn new() -> Self {
        Self::from_root(FileSystemNode::folder(DRIVE))
    }

    /// Create a drive holding the stock folders and sample documents
    pub fn seeded() -> Self {
        Self::from_root(seeded_drive())
    }

    fn from_root(root: FileSystemNode) -> Self {
        Self {
            root: Arc::new(RwLock::new(root)),
        }
    }

    /// Walk from the drive root to `path`
    pub(super) fn locate<'a>(
        root: &'a FileSystemNode,
        path: &VfsPath,
    ) -> VfsResult<&'a FileSystemNode> {
        let mut current = root;
        for segment in path.segments() {
            current = current
                .child(segment)
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        }
        Ok(current)
    }

    /// Mutable walk from the drive root to `path`
    pub(super) fn locate_mut<'a>(
        root: &'a mut FileSystemNode,
        path: &VfsPath,
    ) -> VfsResult<&'a mut FileSystemNode> {
        let mut current = root;
        for segment in path.segments() {
            current = current
                .child_mut(segment)
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        }
        Ok(current)
    }

    /// Resolve the folder that contains `path`
    pub(super) fn parent_mut<'a>(
        root: &'a mut FileSystemNode,
        path: &VfsPath,
    ) -> VfsResult<&'a mut FileSystemNode> {
        let parent_path = path
            .parent()
            .ok_or_else(|| VfsError::InvalidPath(format!("{} is the drive root", path)))?;

        let parent = Self::locate_mut(root, &parent_path).map_err(|_| {
            VfsError::NotFound(format!("parent folder not found: {}", parent_path))
        })?;
        if !parent.is_folder() {
            return Err(VfsError::NotAFolder(parent_path.to_string()));
        }
        Ok(parent)
    }

    /// Last segment of a non-root path
    pub(super) fn leaf_name(path: &VfsPath) -> VfsResult<&str> {
        path.name()
            .ok_or_else(|| VfsError::InvalidPath(format!("{} is the drive root", path)))
    }
}

impl Default for MemFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFS {
    fn read_file(&self, path: &VfsPath) -> VfsResult<String> {
        self.read_impl(path)
    }

    fn write_file(&self, path: &VfsPath, content: &str) -> VfsResult<WriteOutcome> {
        self.write_impl(path, content)
    }

    fn list_directory(&self, path: &VfsPath) -> VfsResult<Vec<FileSystemNode>> {
        self.list_dir_impl(path)
    }

    fn create_directory(&self, path: &VfsPath) -> VfsResult<()> {
        self.create_dir_impl(path)
    }

    fn delete_item(&self, path: &VfsPath) -> VfsResult<()> {
        self.delete_impl(path)
    }

    fn rename_item(&self, path: &VfsPath, new_name: &str) -> VfsResult<VfsPath> {
        self.rename_impl(path, new_name)
    }

    fn copy_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        self.copy_impl(source, destination)
    }

    fn move_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        self.move_impl(source, destination)
    }

    fn metadata(&self, path: &VfsPath) -> VfsResult<FileSystemNode> {
        self.metadata_impl(path)
    }

    fn exists(&self, path: &VfsPath) -> bool {
        self.exists_impl(path)
    }

    fn name(&self) -> &str {
        "memfs"
    }
}
