/*!
 * Applications
 * App catalog, metadata and the built-in app set
 */

pub mod builtin;
pub mod registry;
pub mod types;

pub use builtin::{default_app_for_extension, register_builtin_apps};
pub use registry::AppRegistry;
pub use types::{
    AppComponent, AppDefinition, AppMetadata, HeadlessComponent, RunnableBy, WindowGeometry,
};
