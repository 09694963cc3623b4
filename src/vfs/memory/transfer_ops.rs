/*!
 * Transfer Operations Implementation
 * Rename, copy and move as single tree mutations
 */

use super::super::types::*;
use super::MemFS;

impl MemFS {
    pub(super) fn rename_impl(&self, path: &VfsPath, new_name: &str) -> VfsResult<VfsPath> {
        VfsPath::validate_name(new_name)?;
        let name = Self::leaf_name(path)?;
        let target = path
            .parent()
            .ok_or_else(|| VfsError::InvalidPath(format!("{} is the drive root", path)))?
            .join(new_name)?;

        let mut root = self.root.write();
        let parent = Self::parent_mut(&mut root, path)
            .map_err(|_| VfsError::NotFound(path.to_string()))?;

        if parent.child(name).is_none() {
            return Err(VfsError::NotFound(path.to_string()));
        }
        if parent.child(new_name).is_some() {
            return Err(VfsError::AlreadyExists(format!(
                "a file or folder named '{}' already exists in this location",
                new_name
            )));
        }

        // Detach and reattach under the same write guard
        let mut node = parent
            .remove_child(name)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        node.rename(new_name);
        parent
            .insert_child(node)
            .map_err(|_| VfsError::NotAFolder(target.to_string()))?;

        Ok(target)
    }

    pub(super) fn copy_impl(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        let dest_name = Self::leaf_name(destination)?;
        let mut root = self.root.write();

        // Snapshot first: copying a folder into its own subtree stays finite
        let copy = Self::locate(&root, source)
            .map_err(|_| VfsError::NotFound(format!("source item not found: {}", source)))?
            .deep_copy_as(dest_name);

        let parent = Self::parent_mut(&mut root, destination)?;
        if parent.child(dest_name).is_some() {
            return Err(VfsError::AlreadyExists(destination.to_string()));
        }
        parent
            .insert_child(copy)
            .map_err(|_| VfsError::NotAFolder(destination.to_string()))
    }

    pub(super) fn move_impl(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        let source_name = Self::leaf_name(source)?;
        let dest_name = Self::leaf_name(destination)?;

        if destination == source {
            return Err(VfsError::AlreadyExists(destination.to_string()));
        }
        if destination.starts_with(source) {
            return Err(VfsError::InvalidPath(format!(
                "cannot move {} into itself",
                source
            )));
        }

        let mut root = self.root.write();
        Self::locate(&root, source)
            .map_err(|_| VfsError::NotFound(format!("source item not found: {}", source)))?;

        {
            let dest_parent = Self::parent_mut(&mut root, destination)?;
            if dest_parent.child(dest_name).is_some() {
                return Err(VfsError::AlreadyExists(destination.to_string()));
            }
        }

        // Both parents were checked above and the destination lies outside
        // the source subtree, so detaching cannot invalidate it
        let mut node = Self::parent_mut(&mut root, source)?
            .remove_child(source_name)
            .ok_or_else(|| VfsError::NotFound(source.to_string()))?;
        node.rename(dest_name);
        Self::parent_mut(&mut root, destination)?
            .insert_child(node)
            .map_err(|_| VfsError::NotAFolder(destination.to_string()))
    }
}
