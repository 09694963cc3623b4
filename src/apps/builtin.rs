/*!
 * Built-in Apps
 * Stock catalog and default file associations
 */

use tracing::info;

use super::registry::AppRegistry;
use super::types::{AppMetadata, HeadlessComponent};
use crate::core::limits::{CMD_APP_ID, RUN_APP_ID};

pub const NOTEPAD: &str = "notepad";
pub const PAINT: &str = "paint";
pub const BROWSER: &str = "browser";
pub const RUN: &str = RUN_APP_ID;
pub const CONTROL_PANEL: &str = "control-panel";
pub const FILE_EXPLORER: &str = "file-explorer";
pub const CMD: &str = CMD_APP_ID;

/// Stock app metadata in registration order
pub fn builtin_catalog() -> Vec<(&'static str, AppMetadata)> {
    vec![
        (
            NOTEPAD,
            AppMetadata::new("Notepad")
                .with_capabilities(["TXT", "TEXT_EDITOR"])
                .with_size(600, 400)
                .with_category("productivity"),
        ),
        (
            PAINT,
            AppMetadata::new("Paint")
                .with_capabilities(["IMAGE_EDITOR", "GRAPHICS"])
                .with_size(900, 700)
                .with_category("graphics"),
        ),
        (
            BROWSER,
            AppMetadata::new("Browser")
                .with_capabilities(["WEB_BROWSER", "HTML", "HTTP"])
                .with_size(1000, 700)
                .with_category("internet"),
        ),
        (
            RUN,
            AppMetadata::new("Run")
                .with_capabilities(["SYSTEM_LAUNCHER"])
                .with_size(400, 300)
                .with_category("system")
                .single_instance()
                .hidden_from_desktop(),
        ),
        (
            CONTROL_PANEL,
            AppMetadata::new("Control Panel")
                .with_capabilities(["SYSTEM_SETTINGS", "CONFIGURATION"])
                .with_size(900, 600)
                .with_category("system")
                .single_instance(),
        ),
        (
            FILE_EXPLORER,
            AppMetadata::new("File Explorer")
                .with_capabilities(["FILE_SYSTEM", "FILE_BROWSER"])
                .with_size(900, 600)
                .with_category("system"),
        ),
        (
            CMD,
            AppMetadata::new("Command Prompt")
                .with_capabilities(["COMMAND_LINE", "SYSTEM_COMMANDS"])
                .with_size(800, 500)
                .with_category("system"),
        ),
    ]
}

/// Register every stock app
pub fn register_builtin_apps(registry: &AppRegistry) {
    let catalog = builtin_catalog();
    let count = catalog.len();
    for (id, metadata) in catalog {
        registry.register(id, HeadlessComponent::new(id), metadata);
    }
    info!(apps = count, "Built-in apps registered");
}

impl AppRegistry {
    /// Registry pre-populated with the stock catalog
    pub fn with_builtin_apps() -> Self {
        let registry = Self::new();
        register_builtin_apps(&registry);
        registry
    }
}

/// App that opens files with the given extension
pub fn default_app_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "txt" => Some(NOTEPAD),
        "html" | "htm" => Some(BROWSER),
        "png" | "jpg" | "jpeg" | "bmp" => Some(PAINT),
        _ => None,
    }
}
