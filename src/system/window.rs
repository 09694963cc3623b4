/*!
 * Window Manager
 * Open app instances, focus and single-instance semantics
 */

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

use crate::apps::{AppDefinition, AppRegistry};
use crate::core::errors::{AppError, AppResult};
use crate::core::id::TimestampGenerator;
use crate::core::types::{now_millis, AppId, AppProps, InstanceId, Timestamp};

/// One open window
#[derive(Debug, Clone)]
pub struct AppInstance {
    pub id: InstanceId,
    pub app_id: AppId,
    pub definition: Arc<AppDefinition>,
    pub props: AppProps,
    pub opened_at: Timestamp,
}

#[derive(Debug, Default)]
struct WindowState {
    /// Opening order; the last entry is the most recently opened
    open: Vec<AppInstance>,
    active: Option<InstanceId>,
}

/// Window manager builder
pub struct WindowManagerBuilder {
    registry: AppRegistry,
    ids: Option<TimestampGenerator>,
}

impl WindowManagerBuilder {
    pub fn new(registry: AppRegistry) -> Self {
        Self {
            registry,
            ids: None,
        }
    }

    /// Share an instance id source with other components
    pub fn with_id_generator(mut self, ids: TimestampGenerator) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn build(self) -> WindowManager {
        info!(apps = self.registry.len(), "Window manager initialized");
        WindowManager {
            registry: self.registry,
            state: Arc::new(RwLock::new(WindowState::default())),
            ids: self.ids.unwrap_or_default(),
        }
    }
}

/// Window/lifecycle manager
#[derive(Clone)]
pub struct WindowManager {
    registry: AppRegistry,
    state: Arc<RwLock<WindowState>>,
    ids: TimestampGenerator,
}

impl WindowManager {
    pub fn new(registry: AppRegistry) -> Self {
        WindowManagerBuilder::new(registry).build()
    }

    pub fn builder(registry: AppRegistry) -> WindowManagerBuilder {
        WindowManagerBuilder::new(registry)
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Open an app, or focus its window when it is single-instance and open
    ///
    /// Re-opening a single-instance app keeps the props of the first open.
    pub fn open_app(&self, app_id: &str, props: AppProps) -> AppResult<InstanceId> {
        let definition = self
            .registry
            .get(app_id)
            .ok_or_else(|| AppError::UnknownApp(app_id.to_string()))?;

        let instance = {
            let mut state = self.state.write();

            if definition.metadata.single_instance {
                if let Some(existing) = state.open.iter().find(|i| i.id == *app_id) {
                    let id = existing.id.clone();
                    debug!(app = app_id, instance = %id, "Single-instance app already open, focusing");
                    state.active = Some(id.clone());
                    return Ok(id);
                }
            }

            let id = if definition.metadata.single_instance {
                InstanceId::new(app_id)
            } else {
                self.ids.instance_id(app_id)
            };

            let instance = AppInstance {
                id: id.clone(),
                app_id: app_id.to_string(),
                definition: Arc::clone(&definition),
                props: normalize_props(props),
                opened_at: now_millis(),
            };
            state.open.push(instance.clone());
            state.active = Some(id);
            instance
        };

        // Component hooks run outside the state lock
        instance.definition.component.mount(&instance.id, &instance.props);
        info!(app = app_id, instance = %instance.id, "App opened");
        Ok(instance.id)
    }

    /// Close an instance; focus falls back to the most recently opened one
    pub fn close_app(&self, instance_id: &str) -> AppResult<AppInstance> {
        let closed = {
            let mut state = self.state.write();
            let index = state
                .open
                .iter()
                .position(|i| i.id == *instance_id)
                .ok_or_else(|| AppError::InstanceNotFound(instance_id.to_string()))?;
            let closed = state.open.remove(index);

            if state.active.as_ref() == Some(&closed.id) {
                state.active = state.open.last().map(|i| i.id.clone());
            }
            closed
        };

        closed.definition.component.unmount(&closed.id);
        info!(app = %closed.app_id, instance = %closed.id, "App closed");
        Ok(closed)
    }

    /// Focus an open instance
    pub fn set_active_app(&self, instance_id: &str) -> AppResult<()> {
        let mut state = self.state.write();
        let id = state
            .open
            .iter()
            .find(|i| i.id == *instance_id)
            .map(|i| i.id.clone())
            .ok_or_else(|| AppError::InstanceNotFound(instance_id.to_string()))?;
        debug!(instance = %id, "Focus changed");
        state.active = Some(id);
        Ok(())
    }

    /// Open instances in opening order
    pub fn open_apps(&self) -> Vec<AppInstance> {
        self.state.read().open.clone()
    }

    pub fn active_app(&self) -> Option<InstanceId> {
        self.state.read().active.clone()
    }

    pub fn active_instance(&self) -> Option<AppInstance> {
        let state = self.state.read();
        let active = state.active.as_ref()?;
        state.open.iter().find(|i| &i.id == active).cloned()
    }

    pub fn instance(&self, instance_id: &str) -> Option<AppInstance> {
        self.state
            .read()
            .open
            .iter()
            .find(|i| i.id == *instance_id)
            .cloned()
    }

    /// Open instances of one app
    pub fn instances_of(&self, app_id: &str) -> Vec<AppInstance> {
        self.state
            .read()
            .open
            .iter()
            .filter(|i| i.app_id == app_id)
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("WindowManager")
            .field("open", &state.open.len())
            .field("active", &state.active)
            .finish()
    }
}

/// Props are always a JSON object; anything else is wrapped under `value`
fn normalize_props(props: AppProps) -> AppProps {
    match props {
        Value::Object(_) => props,
        Value::Null => Value::Object(Map::new()),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            Value::Object(map)
        }
    }
}
