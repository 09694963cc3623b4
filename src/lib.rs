/*!
 * Desktop Simulation Library
 * In-memory Windows 98 style desktop: drive, apps, windows and shell
 */

pub mod api;
pub mod apps;
pub mod core;
pub mod monitoring;
pub mod shell;
pub mod system;
pub mod vfs;

// Re-exports
pub use api::{SystemApi, SystemBuilder, SystemState};
pub use apps::{AppDefinition, AppMetadata, AppRegistry};
pub use crate::core::config::{LatencyProfile, SystemConfig};
pub use crate::core::errors::{AppError, ClipboardError, SystemError, SystemResult};
pub use crate::core::types::InstanceId;
pub use monitoring::init_tracing;
pub use shell::{CommandPrompt, RunDialog};
pub use system::{ClipboardContent, EventBus, FsChange, FsChangeKind, Severity, SystemEvent, Topic};
pub use vfs::{FileSystemNode, VfsError, VfsPath};
