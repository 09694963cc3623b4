/*!
 * App Types
 * Metadata, definitions and the mountable component seam
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::core::types::{AppId, AppProps, InstanceId};

/// Placeholder icon used by every stock app
pub const DEFAULT_ICON: &str = "/placeholder.svg?height=32&width=32";

/// Who may launch an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnableBy {
    System,
    User,
    Both,
}

impl RunnableBy {
    #[must_use]
    pub const fn allows_user(self) -> bool {
        matches!(self, Self::User | Self::Both)
    }
}

/// Initial window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Static description of an installable app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub icon_path: String,
    /// Capability tags such as `TXT` or `IMAGE_EDITOR`
    pub capabilities: Vec<String>,
    pub runnable_by: RunnableBy,
    pub single_instance: bool,
    pub show_on_desktop: bool,
    pub default_size: WindowGeometry,
    pub category: String,
}

impl AppMetadata {
    /// Metadata with stock defaults: user-launchable, multi-instance, on the desktop
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_path: DEFAULT_ICON.to_string(),
            capabilities: Vec::new(),
            runnable_by: RunnableBy::Both,
            single_instance: false,
            show_on_desktop: true,
            default_size: WindowGeometry::default(),
            category: "general".to_string(),
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = icon_path.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.default_size = WindowGeometry { width, height };
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_runnable_by(mut self, runnable_by: RunnableBy) -> Self {
        self.runnable_by = runnable_by;
        self
    }

    pub fn single_instance(mut self) -> Self {
        self.single_instance = true;
        self
    }

    pub fn hidden_from_desktop(mut self) -> Self {
        self.show_on_desktop = false;
        self
    }

    /// Case-insensitive capability check
    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.iter().any(|c| c.eq_ignore_ascii_case(tag))
    }
}

/// Mountable app body
///
/// Rendering lives outside the crate; components only get lifecycle hooks.
pub trait AppComponent: Send + Sync + fmt::Debug {
    /// Called once when a new instance opens
    fn mount(&self, _instance: &InstanceId, _props: &AppProps) {}

    /// Called once when the instance closes
    fn unmount(&self, _instance: &InstanceId) {}
}

/// Component without a UI that only logs its lifecycle
#[derive(Debug, Clone)]
pub struct HeadlessComponent {
    app_id: AppId,
}

impl HeadlessComponent {
    pub fn new(app_id: impl Into<AppId>) -> Arc<dyn AppComponent> {
        Arc::new(Self {
            app_id: app_id.into(),
        })
    }
}

impl AppComponent for HeadlessComponent {
    fn mount(&self, instance: &InstanceId, props: &AppProps) {
        debug!(app = %self.app_id, instance = %instance, props = %props, "Component mounted");
    }

    fn unmount(&self, instance: &InstanceId) {
        debug!(app = %self.app_id, instance = %instance, "Component unmounted");
    }
}

/// Registered app: immutable once in the registry
#[derive(Debug, Clone)]
pub struct AppDefinition {
    pub id: AppId,
    pub component: Arc<dyn AppComponent>,
    pub metadata: AppMetadata,
}
