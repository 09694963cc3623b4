/*!
 * App Lifecycle Operations
 * Open, close and focus with failures surfaced as notifications
 */

use super::facade::SystemApi;
use crate::apps::AppMetadata;
use crate::core::errors::SystemResult;
use crate::core::types::{AppProps, InstanceId};
use crate::monitoring::span_operation;
use crate::system::AppInstance;

impl SystemApi {
    /// Open an app; unknown ids post an error toast
    pub fn open_app(&self, app_id: &str, props: AppProps) -> SystemResult<InstanceId> {
        let span = span_operation("open_app");
        let outcome = self.windows.open_app(app_id, props);
        span.record_result(outcome.is_ok());

        outcome.map_err(|e| {
            self.error(&e.to_string(), None);
            e.into()
        })
    }

    pub fn close_app(&self, instance_id: &str) -> SystemResult<()> {
        let span = span_operation("close_app");
        let outcome = self.windows.close_app(instance_id);
        span.record_result(outcome.is_ok());
        outcome.map(|_| ()).map_err(Into::into)
    }

    pub fn set_active_app(&self, instance_id: &str) -> SystemResult<()> {
        Ok(self.windows.set_active_app(instance_id)?)
    }

    pub fn get_app_metadata(&self, app_id: &str) -> Option<AppMetadata> {
        self.registry().metadata(app_id)
    }

    pub fn open_apps(&self) -> Vec<AppInstance> {
        self.windows.open_apps()
    }

    pub fn active_app(&self) -> Option<InstanceId> {
        self.windows.active_app()
    }
}
