/*!
 * App Registry
 * Append-only catalog of app definitions keyed by id
 */

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{AppComponent, AppDefinition, AppMetadata};
use crate::core::types::AppId;

/// App catalog
///
/// Clones share the same catalog. There is no removal; registering an id a
/// second time replaces the definition but keeps its original position.
#[derive(Clone)]
pub struct AppRegistry {
    apps: Arc<DashMap<AppId, Arc<AppDefinition>, RandomState>>,
    /// Registration order for stable listings
    order: Arc<RwLock<Vec<AppId>>>,
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            apps: Arc::new(DashMap::with_hasher(RandomState::new())),
            order: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register (or replace) an app
    pub fn register(
        &self,
        id: impl Into<AppId>,
        component: Arc<dyn AppComponent>,
        metadata: AppMetadata,
    ) -> Arc<AppDefinition> {
        let id = id.into();
        let definition = Arc::new(AppDefinition {
            id: id.clone(),
            component,
            metadata,
        });

        // Order lock held across the insert so listings never see a gap
        let mut order = self.order.write();
        if self.apps.insert(id.clone(), Arc::clone(&definition)).is_some() {
            warn!(app = %id, "App re-registered, replacing previous definition");
        } else {
            debug!(app = %id, name = %definition.metadata.name, "App registered");
            order.push(id);
        }

        definition
    }

    pub fn get(&self, id: &str) -> Option<Arc<AppDefinition>> {
        self.apps.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.apps.contains_key(id)
    }

    pub fn metadata(&self, id: &str) -> Option<AppMetadata> {
        self.apps.get(id).map(|entry| entry.metadata.clone())
    }

    /// All apps in registration order
    pub fn apps(&self) -> Vec<Arc<AppDefinition>> {
        let order = self.order.read();
        order.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Apps carrying a capability tag (case-insensitive)
    pub fn by_capability(&self, tag: &str) -> Vec<Arc<AppDefinition>> {
        self.filtered(|def| def.metadata.has_capability(tag))
    }

    pub fn by_category(&self, category: &str) -> Vec<Arc<AppDefinition>> {
        self.filtered(|def| def.metadata.category == category)
    }

    /// Apps that get a desktop icon
    pub fn desktop_apps(&self) -> Vec<Arc<AppDefinition>> {
        self.filtered(|def| def.metadata.show_on_desktop)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&AppDefinition) -> bool) -> Vec<Arc<AppDefinition>> {
        self.apps()
            .into_iter()
            .filter(|def| predicate(def))
            .collect()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRegistry")
            .field("apps", &*self.order.read())
            .finish()
    }
}
