/*!
 * VFS Error Types
 * Structured, type-safe error handling for file-system operations
 */

use miette::Diagnostic;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// VFS operation result
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS errors with structured, type-safe error handling
///
/// All error variants carry the offending path (or a short reason) and
/// serialize with a tagged enum pattern.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum VfsError {
    #[error("Not found: {0}")]
    #[diagnostic(code(vfs::not_found), help("Check the path; only the C: drive exists."))]
    NotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Already exists: {0}")]
    #[diagnostic(code(vfs::already_exists), help("Pick a different name or delete the existing item first."))]
    AlreadyExists(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Directory is not empty: {0}")]
    #[diagnostic(code(vfs::not_empty), help("Delete the folder's contents first."))]
    NotEmpty(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Invalid path: {0}")]
    #[diagnostic(code(vfs::invalid_path), help("Paths are absolute, e.g. C:\\My Documents\\file.txt"))]
    InvalidPath(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Not a folder: {0}")]
    #[diagnostic(code(vfs::not_a_folder))]
    NotAFolder(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Is a folder: {0}")]
    #[diagnostic(code(vfs::is_a_folder))]
    IsAFolder(#[serde(deserialize_with = "deserialize_nonempty_string")] String),
}

/// Deserialize and validate non-empty string for error messages
pub(super) fn deserialize_nonempty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("error message must not be empty"));
    }
    Ok(s)
}
