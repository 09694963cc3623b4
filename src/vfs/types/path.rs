/*!
 * VFS Paths
 * Fully-resolved absolute paths on the single simulated drive
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{VfsError, VfsResult};
use crate::core::limits::{DRIVE, SEPARATOR};

/// Absolute path under the drive root
///
/// Parsing accepts `/` as a separator, ignores a leading separator and empty
/// segments, and matches the drive letter case-insensitively. Relative
/// segments (`.`, `..`) are rejected: callers resolve them first with
/// [`crate::vfs::paths::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    /// The drive root (`C:`)
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse an absolute path
    pub fn parse(raw: &str) -> VfsResult<Self> {
        let normalized = raw.replace('/', "\\");
        let mut parts = normalized.split(SEPARATOR).filter(|p| !p.is_empty());

        match parts.next() {
            Some(drive) if drive.eq_ignore_ascii_case(DRIVE) => {}
            Some(_) => {
                return Err(VfsError::InvalidPath(format!(
                    "only the {} drive is supported: {}",
                    DRIVE, raw
                )))
            }
            None => return Err(VfsError::InvalidPath("path is empty".into())),
        }

        let mut segments = Vec::new();
        for part in parts {
            if part == "." || part == ".." {
                return Err(VfsError::InvalidPath(format!(
                    "path must be fully resolved: {}",
                    raw
                )));
            }
            Self::validate_name(part)?;
            segments.push(part.to_string());
        }

        Ok(Self { segments })
    }

    /// Validate a single path segment
    pub fn validate_name(name: &str) -> VfsResult<()> {
        if name.is_empty() {
            return Err(VfsError::InvalidPath("name cannot be empty".into()));
        }
        if name.contains('\0') {
            return Err(VfsError::InvalidPath("name cannot contain null bytes".into()));
        }
        if name.contains('/') || name.contains(SEPARATOR) {
            return Err(VfsError::InvalidPath(format!(
                "name cannot contain path separators: {}",
                name
            )));
        }
        if name == "." || name == ".." {
            return Err(VfsError::InvalidPath(format!("reserved name: {}", name)));
        }
        Ok(())
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, `None` for the drive root
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Containing folder, `None` for the drive root
    pub fn parent(&self) -> Option<VfsPath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Append one validated segment
    pub fn join(&self, name: &str) -> VfsResult<VfsPath> {
        Self::validate_name(name)?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }

    /// True when `self` equals `ancestor` or lies beneath it
    pub fn starts_with(&self, ancestor: &VfsPath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// Lower-cased extension of the last segment
    pub fn extension(&self) -> Option<String> {
        let name = self.name()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DRIVE)?;
        for segment in &self.segments {
            write!(f, "{}{}", SEPARATOR, segment)?;
        }
        Ok(())
    }
}

impl FromStr for VfsPath {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VfsPath {
    type Error = VfsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VfsPath> for String {
    fn from(value: VfsPath) -> Self {
        value.to_string()
    }
}
