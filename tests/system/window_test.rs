/*!
 * Window Manager Tests
 * Lifecycle against a custom registry with observable components
 */

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;

use desktop_sim::apps::{AppComponent, AppMetadata, AppRegistry};
use desktop_sim::core::id::TimestampGenerator;
use desktop_sim::core::types::{AppProps, InstanceId};
use desktop_sim::system::WindowManager;

#[derive(Debug, Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl AppComponent for Recorder {
    fn mount(&self, instance: &InstanceId, props: &AppProps) {
        self.events
            .lock()
            .unwrap()
            .push(format!("mount {} {}", instance, props));
    }

    fn unmount(&self, instance: &InstanceId) {
        self.events.lock().unwrap().push(format!("unmount {}", instance));
    }
}

fn setup() -> (WindowManager, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let registry = AppRegistry::new();
    registry.register("viewer", recorder.clone(), AppMetadata::new("Viewer"));
    registry.register(
        "settings",
        recorder.clone(),
        AppMetadata::new("Settings").single_instance(),
    );
    (WindowManager::new(registry), recorder)
}

#[test]
fn test_component_hooks_follow_lifecycle() {
    let (windows, recorder) = setup();

    let id = windows.open_app("viewer", json!("photo.png")).unwrap();
    windows.close_app(id.as_str()).unwrap();

    let events = recorder.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            format!("mount {} {{\"value\":\"photo.png\"}}", id),
            format!("unmount {}", id),
        ]
    );
}

#[test]
fn test_single_instance_focus_does_not_remount() {
    let (windows, recorder) = setup();

    let settings = windows.open_app("settings", json!({})).unwrap();
    let viewer = windows.open_app("viewer", json!({})).unwrap();
    assert_eq!(windows.active_app(), Some(viewer));

    assert_eq!(windows.open_app("settings", json!({ "page": 2 })).unwrap(), settings);
    assert_eq!(windows.active_app(), Some(settings.clone()));
    assert_eq!(settings.as_str(), "settings");
    assert_eq!(recorder.events.lock().unwrap().len(), 2);
}

#[test]
fn test_multi_instance_ids_are_unique() {
    let registry = AppRegistry::new();
    registry.register("viewer", Arc::new(Recorder::default()), AppMetadata::new("Viewer"));
    let windows = WindowManager::builder(registry)
        .with_id_generator(TimestampGenerator::new())
        .build();

    let ids: Vec<InstanceId> = (0..20)
        .map(|_| windows.open_app("viewer", json!({})).unwrap())
        .collect();
    let mut unique = ids.clone();
    unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    unique.dedup();

    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| id.as_str().starts_with("viewer-")));
    assert_eq!(windows.instances_of("viewer").len(), 20);
}

#[test]
fn test_focus_unknown_instance_fails() {
    let (windows, _) = setup();
    let id = windows.open_app("viewer", json!({})).unwrap();

    assert!(windows.set_active_app("ghost").is_err());
    assert_eq!(windows.active_app(), Some(id));
}
