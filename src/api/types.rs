/*!
 * API Types
 * Snapshot types returned by the facade
 */

use serde::{Deserialize, Serialize};

use crate::core::types::{BatteryState, NetworkState, Timestamp};
use crate::system::ClipboardContent;

/// Current simulated machine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    /// Wall clock in milliseconds since the epoch
    pub time: Timestamp,
    pub clipboard: Option<ClipboardContent>,
    pub battery: BatteryState,
    pub network: NetworkState,
}
