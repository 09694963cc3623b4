/*!
 * VFS Traits
 * Core file-system abstraction
 */

use super::types::*;

/// Virtual file-system trait
///
/// Paths are fully resolved. Each call completes as a single step against
/// the backing store, so no partially-applied state is ever observable.
pub trait FileSystem: Send + Sync {
    /// Read entire file contents
    fn read_file(&self, path: &VfsPath) -> VfsResult<String>;

    /// Write entire file contents (create or overwrite)
    ///
    /// Reports whether the file was created, decided under the same
    /// mutation that wrote it.
    fn write_file(&self, path: &VfsPath, content: &str) -> VfsResult<WriteOutcome>;

    /// List folder contents ordered by name
    fn list_directory(&self, path: &VfsPath) -> VfsResult<Vec<FileSystemNode>>;

    /// Create an empty folder; the parent must exist
    fn create_directory(&self, path: &VfsPath) -> VfsResult<()>;

    /// Delete a file or an empty folder
    fn delete_item(&self, path: &VfsPath) -> VfsResult<()>;

    /// Rename an item within its folder
    fn rename_item(&self, path: &VfsPath, new_name: &str) -> VfsResult<VfsPath>;

    /// Deep-copy an item to a new, unoccupied path
    fn copy_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()>;

    /// Relocate an item to a new, unoccupied path
    fn move_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()>;

    /// Snapshot of the node at `path`
    fn metadata(&self, path: &VfsPath) -> VfsResult<FileSystemNode>;

    /// Check if a file or folder exists
    fn exists(&self, path: &VfsPath) -> bool {
        self.metadata(path).is_ok()
    }

    /// File-system name/type
    fn name(&self) -> &str;
}
