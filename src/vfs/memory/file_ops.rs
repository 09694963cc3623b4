/*!
 * File Operations Implementation
 * Whole-file read and write
 */

use super::super::types::*;
use super::MemFS;

impl MemFS {
    pub(super) fn read_impl(&self, path: &VfsPath) -> VfsResult<String> {
        let root = self.root.read();
        let node = Self::locate(&root, path)?;
        node.content()
            .map(str::to_string)
            .ok_or_else(|| VfsError::IsAFolder(path.to_string()))
    }

    pub(super) fn write_impl(&self, path: &VfsPath, content: &str) -> VfsResult<WriteOutcome> {
        let name = Self::leaf_name(path)?;
        let mut root = self.root.write();
        let parent = Self::parent_mut(&mut root, path)?;

        match parent.child_mut(name) {
            Some(existing) => {
                // Overwrite in place; folders are never silently replaced
                if !existing.set_content(content.to_string()) {
                    return Err(VfsError::IsAFolder(path.to_string()));
                }
                Ok(WriteOutcome::Overwritten)
            }
            None => parent
                .insert_child(FileSystemNode::file(name, content))
                .map(|()| WriteOutcome::Created)
                .map_err(|_| VfsError::NotAFolder(path.to_string())),
        }
    }
}
