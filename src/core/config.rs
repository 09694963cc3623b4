/*!
 * Simulation Configuration
 *
 * Runtime configuration with defaults taken from `core::limits` and
 * environment overrides for the binary.
 */

use std::env;
use std::time::Duration;
use tracing::warn;

use super::limits::{
    DEFAULT_BATTERY_LEVEL, DEFAULT_LIST_LATENCY, DEFAULT_MUTATE_LATENCY, DEFAULT_NOTIFICATION_TTL,
    DEFAULT_READ_LATENCY, ENV_FS_LATENCY_MS, ENV_NOTIFICATION_TTL_MS, ENV_SEED_TREE,
};
use super::types::NetworkKind;

/// Artificial delays applied before each file-system call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub read: Duration,
    pub list: Duration,
    pub mutate: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            read: DEFAULT_READ_LATENCY,
            list: DEFAULT_LIST_LATENCY,
            mutate: DEFAULT_MUTATE_LATENCY,
        }
    }
}

impl LatencyProfile {
    /// No artificial delay at all
    pub const fn instant() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Same delay for every operation
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            read: delay,
            list: delay,
            mutate: delay,
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// File-system latency model
    pub latency: LatencyProfile,
    /// How long a toast stays before it is removed
    pub notification_ttl: Duration,
    /// Populate the drive with the stock folders and sample files
    pub seed_tree: bool,
    /// Battery level reported by `system_state`
    pub battery_level: u8,
    /// Network link reported by `system_state`
    pub network_kind: NetworkKind,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::default(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            seed_tree: true,
            battery_level: DEFAULT_BATTERY_LEVEL,
            network_kind: NetworkKind::default(),
        }
    }
}

impl SystemConfig {
    /// Zero-latency configuration (tests, benchmarks)
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    /// Defaults with environment overrides applied
    ///
    /// Environment variables:
    /// - DESKTOP_SIM_FS_LATENCY_MS: delay for every file operation
    /// - DESKTOP_SIM_NOTIFICATION_TTL_MS: toast lifetime
    /// - DESKTOP_SIM_SEED_TREE: `0`/`false` starts with an empty drive
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_millis(ENV_FS_LATENCY_MS) {
            config.latency = LatencyProfile::uniform(ms);
        }
        if let Some(ms) = read_millis(ENV_NOTIFICATION_TTL_MS) {
            config.notification_ttl = ms;
        }
        if let Ok(value) = env::var(ENV_SEED_TREE) {
            config.seed_tree = !matches!(value.trim(), "0" | "false");
        }

        config
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn with_seed_tree(mut self, seed: bool) -> Self {
        self.seed_tree = seed;
        self
    }
}

fn read_millis(key: &str) -> Option<Duration> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            warn!(key = key, value = %raw, error = %e, "Ignoring malformed environment override");
            None
        }
    }
}
