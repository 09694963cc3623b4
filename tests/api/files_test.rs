/*!
 * File Operation Tests
 * Facade file calls, change events, launching and clipboard paste
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;

use desktop_sim::api::INITIAL_FILE_PATH;
use desktop_sim::system::{ClipboardKind, Subscription};
use desktop_sim::vfs::VfsPath;
use desktop_sim::{
    ClipboardContent, ClipboardError, FsChangeKind, LatencyProfile, Severity, SystemApi,
    SystemConfig, SystemError, VfsError,
};

fn api() -> SystemApi {
    SystemApi::new(SystemConfig::instant())
}

type ChangeLog = Arc<Mutex<Vec<(String, FsChangeKind)>>>;

fn record_changes(api: &SystemApi) -> (Subscription, ChangeLog) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let subscription = api.subscribe_to_file_system_changes(move |change| {
        sink.lock().unwrap().push((change.path.to_string(), change.kind));
    });
    (subscription, log)
}

#[tokio::test]
async fn test_write_list_read_delete_scenario() {
    let api = api();
    let file = "C:\\My Documents\\a.txt";

    api.write_file(file, "hello").await.unwrap();

    let listing = api.list_directory("C:\\My Documents").await.unwrap();
    let entry = listing.iter().find(|n| n.name() == "a.txt").unwrap();
    assert_eq!(entry.size(), Some(5));
    assert_eq!(api.read_file(file).await.unwrap(), "hello");

    api.delete_item(file).await.unwrap();
    assert!(matches!(
        api.read_file(file).await,
        Err(SystemError::Vfs(VfsError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_listing_paths_are_children_of_folder() {
    let api = api();
    let dir = VfsPath::parse("C:\\My Documents").unwrap();

    for node in api.list_directory(&dir).await.unwrap() {
        let child = dir.join(node.name()).unwrap();
        assert!(api.exists(&child), "{} should exist", child);
        assert_eq!(child.parent(), Some(dir.clone()));
    }
}

#[tokio::test]
async fn test_create_directory_twice_keeps_existing() {
    let api = api();
    api.write_file("C:\\WINDOWS\\TEMP\\keep.txt", "data").await.unwrap();

    assert!(matches!(
        api.create_directory("C:\\WINDOWS\\TEMP").await,
        Err(SystemError::Vfs(VfsError::AlreadyExists(_)))
    ));
    assert_eq!(api.read_file("C:\\WINDOWS\\TEMP\\keep.txt").await.unwrap(), "data");
}

#[tokio::test]
async fn test_copy_then_delete_matches_move() {
    let api = api();
    api.create_directory("C:\\src").await.unwrap();
    api.write_file("C:\\src\\a.txt", "payload").await.unwrap();

    api.copy_item("C:\\src", "C:\\copied").await.unwrap();
    api.delete_item("C:\\src\\a.txt").await.unwrap();
    api.delete_item("C:\\src").await.unwrap();

    assert_eq!(api.read_file("C:\\copied\\a.txt").await.unwrap(), "payload");
    assert!(!api.exists("C:\\src"));
}

#[tokio::test]
async fn test_mutations_publish_changes() {
    let api = api();
    let (_subscription, log) = record_changes(&api);

    api.write_file("C:\\a.txt", "1").await.unwrap();
    api.write_file("C:\\a.txt", "2").await.unwrap();
    let renamed = api.rename_item("C:\\a.txt", "b.txt").await.unwrap();
    api.create_directory("C:\\dir").await.unwrap();
    api.move_item(&renamed, "C:\\dir\\b.txt").await.unwrap();
    api.copy_item("C:\\dir\\b.txt", "C:\\c.txt").await.unwrap();
    api.delete_item("C:\\c.txt").await.unwrap();

    let expected = vec![
        ("C:\\a.txt", FsChangeKind::Created),
        ("C:\\a.txt", FsChangeKind::Modified),
        ("C:\\a.txt", FsChangeKind::Renamed),
        ("C:\\b.txt", FsChangeKind::Renamed),
        ("C:\\dir", FsChangeKind::Created),
        ("C:\\b.txt", FsChangeKind::Moved),
        ("C:\\dir\\b.txt", FsChangeKind::Moved),
        ("C:\\c.txt", FsChangeKind::Copied),
        ("C:\\c.txt", FsChangeKind::Deleted),
    ];
    let recorded = log.lock().unwrap().clone();
    let recorded: Vec<(&str, FsChangeKind)> = recorded.iter().map(|(p, k)| (p.as_str(), *k)).collect();
    assert_eq!(recorded, expected);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_writes_create_once() {
    let api = SystemApi::new(
        SystemConfig::instant().with_latency(LatencyProfile::uniform(Duration::from_millis(50))),
    );
    let (_subscription, log) = record_changes(&api);

    let (first, second) = tokio::join!(
        api.write_file("C:\\new.txt", "1"),
        api.write_file("C:\\new.txt", "2")
    );
    first.unwrap();
    second.unwrap();

    let kinds: Vec<FsChangeKind> = log.lock().unwrap().iter().map(|(_, k)| *k).collect();
    assert_eq!(kinds, vec![FsChangeKind::Created, FsChangeKind::Modified]);
    let content = api.read_file("C:\\new.txt").await.unwrap();
    assert!(content == "1" || content == "2");
}

#[tokio::test]
async fn test_failed_mutation_publishes_nothing() {
    let api = api();
    let (_subscription, log) = record_changes(&api);

    assert!(api.delete_item("C:\\My Documents").await.is_err());
    assert!(api.rename_item("C:\\missing.txt", "x.txt").await.is_err());
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_execute_file_opens_associated_app() {
    let api = api();

    let id = api
        .execute_file("C:\\My Documents\\readme.txt", json!({ "readOnly": true }))
        .unwrap()
        .unwrap();

    let instance = api.windows().instance(id.as_str()).unwrap();
    assert_eq!(instance.app_id, "notepad");
    assert_eq!(
        instance.props,
        json!({ "initialFilePath": "C:\\My Documents\\readme.txt", "readOnly": true })
    );
    assert_eq!(INITIAL_FILE_PATH, "initialFilePath");

    let html = api.execute_file("C:\\My Documents\\index.html", json!(null)).unwrap().unwrap();
    assert_eq!(api.windows().instance(html.as_str()).unwrap().app_id, "browser");
}

#[tokio::test]
async fn test_execute_unknown_extension_warns() {
    let api = api();

    assert_eq!(api.execute_file("C:\\setup.exe", json!({})).unwrap(), None);
    assert!(api.open_apps().is_empty());

    let toast = api.notifications().pop().unwrap();
    assert_eq!(toast.severity, Severity::Warning);
    assert_eq!(toast.message, "No default application for .exe files.");
}

#[tokio::test]
async fn test_cut_and_paste_moves_item() {
    let api = api();
    let (_subscription, log) = record_changes(&api);

    api.copy_to_clipboard("C:\\My Documents\\readme.txt", true).await.unwrap();
    let content = api.read_clipboard().unwrap();
    assert_eq!(content.kind, ClipboardKind::File);
    assert!(content.is_cut);

    let pasted = api.paste_into("C:\\WINDOWS\\TEMP").await.unwrap();
    assert_eq!(pasted.to_string(), "C:\\WINDOWS\\TEMP\\readme.txt");
    assert!(!api.exists("C:\\My Documents\\readme.txt"));
    assert!(api.read_clipboard().is_none());
    assert_eq!(log.lock().unwrap().len(), 2);

    let toast = api.notifications().pop().unwrap();
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.message, "Moved 'readme.txt' to 'C:\\WINDOWS\\TEMP'.");
}

#[tokio::test]
async fn test_copy_and_paste_folder() {
    let api = api();
    api.create_directory("C:\\WINDOWS\\TEMP\\docs").await.unwrap();

    api.copy_to_clipboard("C:\\My Documents", false).await.unwrap();
    api.paste_into("C:\\WINDOWS\\TEMP\\docs").await.unwrap();

    assert!(api.exists("C:\\My Documents\\readme.txt"));
    assert!(api.exists("C:\\WINDOWS\\TEMP\\docs\\My Documents\\readme.txt"));
}

#[tokio::test]
async fn test_paste_failures_are_reported() {
    let api = api();

    assert!(matches!(
        api.paste_into("C:\\WINDOWS").await,
        Err(SystemError::Clipboard(ClipboardError::Empty))
    ));
    assert_eq!(api.notifications().pop().unwrap().message, "Clipboard is empty.");

    api.write_clipboard(Some(ClipboardContent::text("just words")));
    assert!(matches!(
        api.paste_into("C:\\WINDOWS").await,
        Err(SystemError::Clipboard(ClipboardError::InvalidItem(_)))
    ));

    api.copy_to_clipboard("C:\\My Documents\\readme.txt", false).await.unwrap();
    api.paste_into("C:\\My Documents\\..\\WINDOWS").await.unwrap_err();
    let toast = api.notifications().pop().unwrap();
    assert_eq!(toast.severity, Severity::Error);
    assert!(toast.message.starts_with("Failed to paste item:"));
}
