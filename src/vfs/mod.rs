/*!
 * Virtual File System Module
 * In-memory drive with a pluggable backend and a latency-simulating front
 */

pub mod init;
pub mod memory;
pub mod paths;
pub mod simulated;
pub mod traits;
pub mod types;

// Re-exports
pub use memory::MemFS;
pub use paths::{resolve, well_known, IntoVfsPath};
pub use simulated::SimulatedFS;
pub use traits::FileSystem;
pub use types::{FileSystemNode, NodeKind, VfsError, VfsPath, VfsResult, WriteOutcome};
