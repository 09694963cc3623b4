/*!
 * Facade Tests
 * Lifecycle, messaging, notifications and system state
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;

use desktop_sim::core::types::NetworkKind;
use desktop_sim::{AppError, Severity, SystemApi, SystemConfig, SystemError};

fn api() -> SystemApi {
    SystemApi::new(SystemConfig::instant())
}

#[tokio::test]
async fn test_single_instance_reopen_keeps_first_props() {
    let api = api();

    let first = api.open_app("control-panel", json!({ "tab": "display" })).unwrap();
    let second = api.open_app("control-panel", json!({ "tab": "sounds" })).unwrap();

    assert_eq!(first, second);
    assert_eq!(api.open_apps().len(), 1);
    assert_eq!(api.active_app(), Some(first.clone()));
    let instance = api.windows().instance(first.as_str()).unwrap();
    assert_eq!(instance.props, json!({ "tab": "display" }));
}

#[tokio::test]
async fn test_close_active_falls_back_to_latest() {
    let api = api();

    let a = api.open_app("notepad", json!({})).unwrap();
    let b = api.open_app("paint", json!({})).unwrap();
    let c = api.open_app("browser", json!({})).unwrap();
    assert_ne!(a, b);

    api.set_active_app(b.as_str()).unwrap();
    api.close_app(b.as_str()).unwrap();
    assert_eq!(api.active_app(), Some(c.clone()));

    api.close_app(c.as_str()).unwrap();
    api.close_app(a.as_str()).unwrap();
    assert_eq!(api.active_app(), None);
    assert!(api.open_apps().is_empty());
}

#[tokio::test]
async fn test_unknown_app_posts_error_toast() {
    let api = api();

    let result = api.open_app("solitaire", json!({}));
    assert!(matches!(
        result,
        Err(SystemError::App(AppError::UnknownApp(ref id))) if id == "solitaire"
    ));

    let toasts = api.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].title, "Error");
}

#[tokio::test]
async fn test_close_unknown_instance_fails() {
    let api = api();
    assert!(matches!(
        api.close_app("nope-1"),
        Err(SystemError::App(AppError::InstanceNotFound(_)))
    ));
}

#[tokio::test]
async fn test_app_metadata_lookup() {
    let api = api();

    let notepad = api.get_app_metadata("notepad").unwrap();
    assert_eq!(notepad.name, "Notepad");
    assert!(api.get_app_metadata("solitaire").is_none());
}

#[tokio::test]
async fn test_broadcast_and_unsubscribe() {
    let api = api();
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    let subscription = api.subscribe("chat", move |data| sink.lock().unwrap().push(data.clone()));

    assert_eq!(api.broadcast("chat", json!("hi")), 1);
    assert_eq!(api.broadcast("other", json!("ignored")), 0);

    subscription.unsubscribe();
    assert_eq!(api.broadcast("chat", json!("late")), 0);

    assert_eq!(*received.lock().unwrap(), vec![json!("hi")]);
}

#[tokio::test(start_paused = true)]
async fn test_notifications_expire_after_ttl() {
    let api = SystemApi::new(SystemConfig::instant().with_notification_ttl(Duration::from_secs(5)));

    api.info("Saved", None);
    tokio::time::sleep(Duration::from_secs(2)).await;
    let kept = api.success("Copied", Some("Clipboard"));
    assert_eq!(api.notifications().len(), 2);

    tokio::time::sleep(Duration::from_secs(4)).await;
    let remaining = api.notifications();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept);
    assert_eq!(remaining[0].title, "Clipboard");

    assert!(api.dismiss_notification(kept));
    assert!(!api.dismiss_notification(kept));
    assert!(api.notifications().is_empty());
}

#[tokio::test]
async fn test_system_state_reflects_config() {
    let mut config = SystemConfig::instant();
    config.battery_level = 42;
    config.network_kind = NetworkKind::Wifi;
    let api = SystemApi::new(config);

    let state = api.system_state();
    assert_eq!(state.battery.level, 42);
    assert!(!state.battery.charging);
    assert!(state.network.connected);
    assert_eq!(state.network.kind, NetworkKind::Wifi);
    assert!(state.clipboard.is_none());
}
