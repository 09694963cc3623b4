/*!
 * Run Dialog Tests
 */

use pretty_assertions::assert_eq;
use serde_json::json;

use desktop_sim::core::limits::RUN_APP_ID;
use desktop_sim::shell::{RunDialog, RunOutcome, SystemCommand, RECENT_COMMANDS};
use desktop_sim::{Severity, SystemApi, SystemConfig};

fn setup() -> (SystemApi, RunDialog) {
    let api = SystemApi::new(SystemConfig::instant());
    api.open_app(RUN_APP_ID, json!({})).unwrap();
    (api.clone(), RunDialog::new(api))
}

#[tokio::test]
async fn test_relative_file_opens_in_documents() {
    let (api, run) = setup();

    let outcome = run.run("readme.txt").unwrap();
    let RunOutcome::ExecutedFile(Some(id)) = outcome else {
        panic!("expected a launched file");
    };

    let instance = api.windows().instance(id.as_str()).unwrap();
    assert_eq!(instance.app_id, "notepad");
    assert_eq!(instance.props["initialFilePath"], "C:\\My Documents\\readme.txt");
    assert!(api.windows().instances_of(RUN_APP_ID).is_empty());
}

#[tokio::test]
async fn test_absolute_image_path_opens_paint() {
    let (api, run) = setup();

    let outcome = run.run("C:/My Documents/my_drawing.png").unwrap();
    let RunOutcome::ExecutedFile(Some(id)) = outcome else {
        panic!("expected a launched file");
    };
    assert_eq!(api.windows().instance(id.as_str()).unwrap().app_id, "paint");
}

#[tokio::test]
async fn test_unassociated_file_still_closes_dialog() {
    let (api, run) = setup();

    assert_eq!(run.run("C:\\setup.exe").unwrap(), RunOutcome::ExecutedFile(None));
    assert!(api.windows().instances_of(RUN_APP_ID).is_empty());
    assert_eq!(api.notifications().pop().unwrap().severity, Severity::Warning);
}

#[tokio::test]
async fn test_system_commands_post_info() {
    let (api, run) = setup();

    assert_eq!(
        run.run("Shutdown").unwrap(),
        RunOutcome::System(SystemCommand::Shutdown)
    );

    let toast = api.notifications().pop().unwrap();
    assert_eq!(toast.severity, Severity::Info);
    assert_eq!(toast.message, "Windows is shutting down...");
    assert!(api.windows().instances_of(RUN_APP_ID).is_empty());
}

#[tokio::test]
async fn test_other_drive_is_rejected() {
    let (api, run) = setup();

    assert!(run.run("D:\\game.txt").is_err());
    assert_eq!(api.notifications().pop().unwrap().severity, Severity::Error);
    assert_eq!(api.windows().instances_of(RUN_APP_ID).len(), 1);
}

#[test]
fn test_recent_commands_are_registered_apps() {
    let api = SystemApi::new(SystemConfig::instant());
    for id in RECENT_COMMANDS {
        assert!(api.registry().contains(id), "{} should be registered", id);
    }
}
