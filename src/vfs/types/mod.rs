/*!
 * VFS Types
 * Shared types for file-system operations with serde support
 */

mod errors;
mod node;
mod path;

pub use errors::{VfsError, VfsResult};
pub use node::{FileSystemNode, NodeKind, WriteOutcome};
pub use path::VfsPath;
