/*!
 * System Builder
 * Bootstrap that constructs and wires every service
 */

use tracing::info;

use super::facade::SystemApi;
use crate::apps::AppRegistry;
use crate::core::config::SystemConfig;
use crate::system::{Clipboard, EventBus, NotificationCenter, WindowManager};
use crate::vfs::{MemFS, SimulatedFS};

/// Builder for SystemApi
pub struct SystemBuilder {
    config: SystemConfig,
    builtin_apps: bool,
    registry: Option<AppRegistry>,
    backend: Option<MemFS>,
}

impl SystemBuilder {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            builtin_apps: true,
            registry: None,
            backend: None,
        }
    }

    /// Skip the stock app catalog
    pub fn without_builtin_apps(mut self) -> Self {
        self.builtin_apps = false;
        self
    }

    /// Start from an existing registry (built-ins are still added unless disabled)
    pub fn with_registry(mut self, registry: AppRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a prepared drive instead of a fresh one
    pub fn with_file_system(mut self, backend: MemFS) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> SystemApi {
        let config = self.config;

        let backend = match self.backend {
            Some(backend) => backend,
            None if config.seed_tree => MemFS::seeded(),
            None => MemFS::new(),
        };
        let fs = SimulatedFS::new(backend, config.latency);

        let registry = self.registry.unwrap_or_default();
        if self.builtin_apps {
            crate::apps::register_builtin_apps(&registry);
        }

        let bus = EventBus::new();
        let notifications = NotificationCenter::new(bus.clone(), config.notification_ttl);
        let clipboard = Clipboard::new(bus.clone());
        let windows = WindowManager::new(registry);

        info!(
            read_latency_ms = config.latency.read.as_millis() as u64,
            notification_ttl_ms = config.notification_ttl.as_millis() as u64,
            seeded = config.seed_tree,
            "System ready"
        );

        SystemApi {
            fs,
            windows,
            bus,
            notifications,
            clipboard,
            config,
        }
    }
}
