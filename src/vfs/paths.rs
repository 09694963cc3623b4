/*!
 * Standard Filesystem Paths
 * Well-known locations and relative path resolution for consumers
 */

use std::path::{Component, PathBuf};

use super::types::{VfsError, VfsPath, VfsResult};
use crate::core::limits::{DRIVE, SEPARATOR};

/// Stock folders created on a seeded drive
pub mod well_known {
    pub const WINDOWS: &str = "C:\\WINDOWS";
    pub const SYSTEM: &str = "C:\\WINDOWS\\SYSTEM";
    pub const TEMP: &str = "C:\\WINDOWS\\TEMP";
    pub const PROGRAM_FILES: &str = "C:\\Program Files";
    pub const MY_DOCUMENTS: &str = "C:\\My Documents";
}

/// Anything that can name an absolute drive path
pub trait IntoVfsPath {
    fn into_vfs_path(self) -> VfsResult<VfsPath>;
}

impl IntoVfsPath for VfsPath {
    fn into_vfs_path(self) -> VfsResult<VfsPath> {
        Ok(self)
    }
}

impl IntoVfsPath for &VfsPath {
    fn into_vfs_path(self) -> VfsResult<VfsPath> {
        Ok(self.clone())
    }
}

impl IntoVfsPath for &str {
    fn into_vfs_path(self) -> VfsResult<VfsPath> {
        VfsPath::parse(self)
    }
}

impl IntoVfsPath for String {
    fn into_vfs_path(self) -> VfsResult<VfsPath> {
        VfsPath::parse(&self)
    }
}

impl IntoVfsPath for &String {
    fn into_vfs_path(self) -> VfsResult<VfsPath> {
        VfsPath::parse(self)
    }
}

/// True for inputs starting with a drive designator such as `C:`
pub fn has_drive_prefix(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Resolve user input against a current directory
///
/// - `C:\...` is absolute (other drive letters are rejected)
/// - a leading `\` is relative to the drive root
/// - anything else is relative to `cwd`
///
/// `.` segments are dropped and `..` pops one level, never above the root.
pub fn resolve(cwd: &VfsPath, input: &str) -> VfsResult<VfsPath> {
    let normalized = input.trim().replace('/', "\\");
    if normalized.is_empty() {
        return Ok(cwd.clone());
    }

    let (base, rest) = if has_drive_prefix(&normalized) {
        let (drive, rest) = normalized.split_at(2);
        if !drive.eq_ignore_ascii_case(DRIVE) {
            return Err(VfsError::InvalidPath(format!(
                "only the {} drive is supported: {}",
                DRIVE, input
            )));
        }
        (VfsPath::root(), rest)
    } else if normalized.starts_with(SEPARATOR) {
        (VfsPath::root(), normalized.as_str())
    } else {
        (cwd.clone(), normalized.as_str())
    };

    let mut joined = PathBuf::from("/");
    for segment in base.segments() {
        joined.push(segment);
    }
    for segment in rest.split(SEPARATOR).filter(|s| !s.is_empty()) {
        joined.push(segment);
    }

    // `..` at the root is swallowed by the cleaner, which clamps at the drive
    let cleaned = path_clean::clean(&joined);

    let mut resolved = VfsPath::root();
    for component in cleaned.components() {
        if let Component::Normal(segment) = component {
            let segment = segment
                .to_str()
                .ok_or_else(|| VfsError::InvalidPath(format!("invalid segment in {}", input)))?;
            resolved = resolved.join(segment)?;
        }
    }
    Ok(resolved)
}
