/*!
 * API Facade
 * The surface UI-level consumers call into
 */

mod builder;
mod facade;
mod files;
mod lifecycle;
pub mod types;

pub use builder::SystemBuilder;
pub use facade::SystemApi;
pub use files::INITIAL_FILE_PATH;
pub use types::SystemState;
