/*!
 * Metadata Operations Implementation
 * Node lookups that never mutate
 */

use super::super::types::*;
use super::MemFS;

impl MemFS {
    pub(super) fn metadata_impl(&self, path: &VfsPath) -> VfsResult<FileSystemNode> {
        let root = self.root.read();
        Self::locate(&root, path).cloned()
    }

    pub(super) fn exists_impl(&self, path: &VfsPath) -> bool {
        let root = self.root.read();
        Self::locate(&root, path).is_ok()
    }
}
