/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export VfsError from vfs module
pub use crate::vfs::types::{VfsError, VfsResult};

/// App lifecycle errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AppError {
    #[error("App \"{0}\" not found")]
    #[diagnostic(
        code(app::unknown),
        help("The app id is not registered. Check the registry catalog.")
    )]
    UnknownApp(String),

    #[error("No open window with id {0}")]
    #[diagnostic(
        code(app::instance_not_found),
        help("The window may already have been closed.")
    )]
    InstanceNotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Clipboard errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ClipboardError {
    #[error("Clipboard is empty.")]
    #[diagnostic(code(clipboard::empty), help("Copy or cut an item first."))]
    Empty,

    #[error("Invalid item in clipboard: {0}")]
    #[diagnostic(
        code(clipboard::invalid_item),
        help("Only file and folder entries can be pasted into a folder.")
    )]
    InvalidItem(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Unified error for facade-level operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SystemError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Vfs(#[from] VfsError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Common result type for facade operations
pub type SystemResult<T> = Result<T, SystemError>;
