/*!
 * Directory Operations Implementation
 * Listing, folder creation and deletion
 */

use super::super::types::*;
use super::MemFS;

impl MemFS {
    pub(super) fn list_dir_impl(&self, path: &VfsPath) -> VfsResult<Vec<FileSystemNode>> {
        let root = self.root.read();
        let node = Self::locate(&root, path)?;
        let listing = node
            .children()
            .map(|children| children.cloned().collect())
            .ok_or_else(|| VfsError::NotAFolder(path.to_string()));
        listing
    }

    pub(super) fn create_dir_impl(&self, path: &VfsPath) -> VfsResult<()> {
        let name = Self::leaf_name(path)?;
        let mut root = self.root.write();
        let parent = Self::parent_mut(&mut root, path)?;

        if let Some(existing) = parent.child(name) {
            return Err(VfsError::AlreadyExists(format!(
                "a {} named '{}' already exists",
                existing.kind(),
                existing.name()
            )));
        }

        parent
            .insert_child(FileSystemNode::folder(name))
            .map_err(|_| VfsError::NotAFolder(path.to_string()))
    }

    pub(super) fn delete_impl(&self, path: &VfsPath) -> VfsResult<()> {
        let name = Self::leaf_name(path)?;
        let mut root = self.root.write();
        let parent = Self::parent_mut(&mut root, path)
            .map_err(|_| VfsError::NotFound(path.to_string()))?;

        match parent.child(name).map(FileSystemNode::child_count) {
            None => Err(VfsError::NotFound(path.to_string())),
            Some(count) if count > 0 => Err(VfsError::NotEmpty(path.to_string())),
            Some(_) => {
                parent.remove_child(name);
                Ok(())
            }
        }
    }
}
