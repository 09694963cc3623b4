/*!
 * System Limits and Constants
 *
 * Centralized location for simulation-wide constants and defaults.
 * Organized by domain for maintainability and discoverability.
 */

use std::time::Duration;

// =============================================================================
// FILE SYSTEM
// =============================================================================

/// The single drive every path lives under
pub const DRIVE: &str = "C:";

/// Path separator used for rendering and parsing
pub const SEPARATOR: char = '\\';

/// Simulated latency for file reads
pub const DEFAULT_READ_LATENCY: Duration = Duration::from_millis(100);

/// Simulated latency for directory listings
/// Listings are cheaper than reads in the simulated disk model
pub const DEFAULT_LIST_LATENCY: Duration = Duration::from_millis(50);

/// Simulated latency for writes and every other mutating call
pub const DEFAULT_MUTATE_LATENCY: Duration = Duration::from_millis(100);

/// File operations slower than this are logged at warn level
pub const SLOW_FS_OPERATION_THRESHOLD: Duration = Duration::from_millis(250);

// =============================================================================
// WINDOWS & APPS
// =============================================================================

/// Starting directory for new command prompts
pub const DEFAULT_SHELL_DIRECTORY: &str = "C:\\My Documents";

/// App id of the Run dialog (closed after it launches something)
pub const RUN_APP_ID: &str = "run";

/// App id of the command prompt
pub const CMD_APP_ID: &str = "cmd";

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Toast lifetime before automatic removal
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

// =============================================================================
// SYSTEM STATE
// =============================================================================

/// Simulated battery charge reported by `system_state`
pub const DEFAULT_BATTERY_LEVEL: u8 = 100;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides every simulated file latency (milliseconds)
pub const ENV_FS_LATENCY_MS: &str = "DESKTOP_SIM_FS_LATENCY_MS";

/// Overrides the notification lifetime (milliseconds)
pub const ENV_NOTIFICATION_TTL_MS: &str = "DESKTOP_SIM_NOTIFICATION_TTL_MS";

/// Disables the seeded drive contents when set to `0` or `false`
pub const ENV_SEED_TREE: &str = "DESKTOP_SIM_SEED_TREE";

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "DESKTOP_SIM_TRACE_JSON";
