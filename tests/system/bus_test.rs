/*!
 * Event Bus Tests
 */

use pretty_assertions::assert_eq;
use serde_json::json;

use desktop_sim::system::{EventBus, FsChange, FsChangeKind, SystemEvent, Topic};
use desktop_sim::vfs::VfsPath;

fn path(raw: &str) -> VfsPath {
    VfsPath::parse(raw).unwrap()
}

#[test]
fn test_watch_receives_in_publish_order() {
    let bus = EventBus::new();
    let (subscription, rx) = bus.watch(Topic::FileSystem);

    for name in ["a.txt", "b.txt", "c.txt"] {
        bus.publish(SystemEvent::FileSystem(FsChange::new(
            path(&format!("C:\\{}", name)),
            FsChangeKind::Created,
        )));
    }

    let received: Vec<String> = rx
        .try_iter()
        .filter_map(|e| e.as_fs_change().map(|c| c.path.to_string()))
        .collect();
    assert_eq!(received, vec!["C:\\a.txt", "C:\\b.txt", "C:\\c.txt"]);

    drop(subscription);
    assert_eq!(bus.subscriber_count(&Topic::FileSystem), 0);
}

#[test]
fn test_dropped_receiver_is_pruned() {
    let bus = EventBus::new();
    let (subscription, rx) = bus.watch(Topic::channel("ticks"));
    subscription.detach();
    drop(rx);

    let event = SystemEvent::Message {
        channel: "ticks".into(),
        data: json!(1),
    };
    assert_eq!(bus.publish(event), 0);
    assert_eq!(bus.subscriber_count(&Topic::channel("ticks")), 0);
}

#[test]
fn test_change_relevance_for_open_views() {
    let created = FsChange::new(path("C:\\My Documents\\new.txt"), FsChangeKind::Created);
    assert!(created.affects_directory(&path("C:\\My Documents")));
    assert!(!created.affects_directory(&path("C:\\WINDOWS")));

    let removed = FsChange::new(path("C:\\My Documents"), FsChangeKind::Deleted);
    assert!(removed.affects_directory(&VfsPath::root()));
    assert!(removed.affects_directory(&path("C:\\My Documents\\Sub")));
}

#[test]
fn test_events_serialize_with_type_tag() {
    let event = SystemEvent::Message {
        channel: "chat".into(),
        data: json!({ "text": "hi" }),
    };
    let encoded = serde_json::to_value(&event).unwrap();
    assert_eq!(encoded["type"], "message");
    assert_eq!(encoded["payload"]["channel"], "chat");
}
