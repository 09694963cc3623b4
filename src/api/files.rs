/*!
 * File Operations
 * File-system calls that broadcast change events, plus file launching
 */

use serde_json::{Map, Value};
use tracing::debug;

use super::facade::SystemApi;
use crate::apps::default_app_for_extension;
use crate::core::errors::{ClipboardError, SystemResult};
use crate::core::types::{AppProps, InstanceId};
use crate::monitoring::span_operation;
use crate::system::{ClipboardContent, FsChange, FsChangeKind};
use crate::vfs::{FileSystemNode, IntoVfsPath, VfsPath, WriteOutcome};

/// Props key carrying the file an app was launched for
pub const INITIAL_FILE_PATH: &str = "initialFilePath";

impl SystemApi {
    pub async fn read_file(&self, path: impl IntoVfsPath) -> SystemResult<String> {
        let path = path.into_vfs_path()?;
        Ok(self.fs.read_file(&path).await?)
    }

    /// Create or overwrite a file
    pub async fn write_file(&self, path: impl IntoVfsPath, content: &str) -> SystemResult<()> {
        let path = path.into_vfs_path()?;
        let kind = match self.fs.write_file(&path, content).await? {
            WriteOutcome::Created => FsChangeKind::Created,
            WriteOutcome::Overwritten => FsChangeKind::Modified,
        };
        self.publish_fs_change(FsChange::new(path, kind));
        Ok(())
    }

    pub async fn list_directory(&self, path: impl IntoVfsPath) -> SystemResult<Vec<FileSystemNode>> {
        let path = path.into_vfs_path()?;
        Ok(self.fs.list_directory(&path).await?)
    }

    pub async fn create_directory(&self, path: impl IntoVfsPath) -> SystemResult<()> {
        let path = path.into_vfs_path()?;
        self.fs.create_directory(&path).await?;
        self.publish_fs_change(FsChange::new(path, FsChangeKind::Created));
        Ok(())
    }

    pub async fn delete_item(&self, path: impl IntoVfsPath) -> SystemResult<()> {
        let path = path.into_vfs_path()?;
        self.fs.delete_item(&path).await?;
        self.publish_fs_change(FsChange::new(path, FsChangeKind::Deleted));
        Ok(())
    }

    /// Rename within the same folder; returns the new path
    pub async fn rename_item(&self, path: impl IntoVfsPath, new_name: &str) -> SystemResult<VfsPath> {
        let path = path.into_vfs_path()?;
        let renamed = self.fs.rename_item(&path, new_name).await?;
        self.publish_fs_change(FsChange::new(path, FsChangeKind::Renamed));
        self.publish_fs_change(FsChange::new(renamed.clone(), FsChangeKind::Renamed));
        Ok(renamed)
    }

    pub async fn copy_item(
        &self,
        source: impl IntoVfsPath,
        destination: impl IntoVfsPath,
    ) -> SystemResult<()> {
        let source = source.into_vfs_path()?;
        let destination = destination.into_vfs_path()?;
        self.fs.copy_item(&source, &destination).await?;
        self.publish_fs_change(FsChange::new(destination, FsChangeKind::Copied));
        Ok(())
    }

    pub async fn move_item(
        &self,
        source: impl IntoVfsPath,
        destination: impl IntoVfsPath,
    ) -> SystemResult<()> {
        let source = source.into_vfs_path()?;
        let destination = destination.into_vfs_path()?;
        self.fs.move_item(&source, &destination).await?;
        self.publish_fs_change(FsChange::new(source, FsChangeKind::Moved));
        self.publish_fs_change(FsChange::new(destination, FsChangeKind::Moved));
        Ok(())
    }

    /// Node snapshot
    pub async fn metadata(&self, path: impl IntoVfsPath) -> SystemResult<FileSystemNode> {
        let path = path.into_vfs_path()?;
        Ok(self.fs.metadata(&path).await?)
    }

    pub fn exists(&self, path: impl IntoVfsPath) -> bool {
        path.into_vfs_path()
            .map(|p| self.fs.exists(&p))
            .unwrap_or(false)
    }

    /// Open a file with the app associated with its extension
    ///
    /// The app receives `{"initialFilePath": path, ...props}`. Unknown
    /// extensions post a warning and open nothing.
    pub fn execute_file(
        &self,
        path: impl IntoVfsPath,
        props: AppProps,
    ) -> SystemResult<Option<InstanceId>> {
        let path = path.into_vfs_path()?;
        let extension = path.extension().unwrap_or_default();

        let Some(app_id) = default_app_for_extension(&extension) else {
            debug!(path = %path, extension = %extension, "No file association");
            self.warn(
                &format!("No default application for .{} files.", extension),
                None,
            );
            return Ok(None);
        };

        let mut merged = Map::new();
        merged.insert(INITIAL_FILE_PATH.to_string(), Value::String(path.to_string()));
        if let Value::Object(extra) = props {
            merged.extend(extra);
        }

        self.open_app(app_id, Value::Object(merged)).map(Some)
    }

    /// Put a file or folder on the clipboard for a later paste
    pub async fn copy_to_clipboard(&self, path: impl IntoVfsPath, cut: bool) -> SystemResult<()> {
        let path = path.into_vfs_path()?;
        let node = self.fs.metadata(&path).await?;
        self.clipboard
            .write(Some(ClipboardContent::item(&path, &node, cut)));
        Ok(())
    }

    /// Paste the clipboard item into `dir`
    ///
    /// Copies, or moves when the entry was cut, then clears the clipboard.
    /// Every outcome is also reported as a toast.
    pub async fn paste_into(&self, dir: impl IntoVfsPath) -> SystemResult<VfsPath> {
        let span = span_operation("paste_into");

        let content = match self.clipboard.read() {
            Some(content) if !content.data.is_empty() => content,
            _ => {
                self.warn(&ClipboardError::Empty.to_string(), None);
                span.record_result(false);
                return Err(ClipboardError::Empty.into());
            }
        };

        let source = match content.source_path() {
            Ok(source) if !source.is_root() => source,
            _ => {
                self.error("Invalid item in clipboard.", None);
                span.record_result(false);
                return Err(ClipboardError::InvalidItem(content.data).into());
            }
        };

        let outcome = self.paste_item(&source, dir, content.is_cut).await;
        span.record_result(outcome.is_ok());

        match outcome {
            Ok(destination) => {
                self.clipboard.clear();
                Ok(destination)
            }
            Err(e) => {
                self.error(&format!("Failed to paste item: {}", e), None);
                Err(e)
            }
        }
    }

    async fn paste_item(
        &self,
        source: &VfsPath,
        dir: impl IntoVfsPath,
        is_cut: bool,
    ) -> SystemResult<VfsPath> {
        let dir = dir.into_vfs_path()?;
        let name = source.name().unwrap_or_default().to_string();
        let destination = dir.join(&name)?;

        if is_cut {
            self.move_item(source, &destination).await?;
            self.success(&format!("Moved '{}' to '{}'.", name, dir), None);
        } else {
            self.copy_item(source, &destination).await?;
            self.success(&format!("Copied '{}' to '{}'.", name, dir), None);
        }
        Ok(destination)
    }
}
