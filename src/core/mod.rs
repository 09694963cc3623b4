/*!
 * Core Module
 * Fundamental types, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod id;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::{LatencyProfile, SystemConfig};
pub use errors::*;
pub use id::{AtomicGenerator, IdGenerator, TimestampGenerator};
pub use types::*;
