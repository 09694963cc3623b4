/*!
 * Command Prompt Tests
 */

use pretty_assertions::assert_eq;

use desktop_sim::shell::{CommandPrompt, LineKind};
use desktop_sim::{SystemApi, SystemConfig};

fn shell() -> (SystemApi, CommandPrompt) {
    let api = SystemApi::new(SystemConfig::instant());
    (api.clone(), CommandPrompt::new(api))
}

#[tokio::test]
async fn test_cd_variants() {
    let (_api, mut shell) = shell();
    assert_eq!(shell.prompt(), "C:\\My Documents>");

    assert!(!shell.execute("cd ..").await.is_error());
    assert_eq!(shell.cwd().to_string(), "C:");

    shell.execute("cd WINDOWS\\TEMP").await;
    assert_eq!(shell.prompt(), "C:\\WINDOWS\\TEMP>");

    shell.execute("cd..").await;
    assert_eq!(shell.cwd().to_string(), "C:\\WINDOWS");

    shell.execute("CD\\").await;
    assert_eq!(shell.cwd().to_string(), "C:");

    let shown = shell.execute("chdir").await;
    assert_eq!(shown.text(), "C:");
}

#[tokio::test]
async fn test_cd_to_missing_folder_keeps_cwd() {
    let (_api, mut shell) = shell();

    let outcome = shell.execute("cd nowhere").await;
    assert!(outcome.is_error());
    assert_eq!(outcome.text(), "The system cannot find the path specified.");

    let outcome = shell.execute("cd readme.txt").await;
    assert!(outcome.is_error());
    assert_eq!(shell.cwd().to_string(), "C:\\My Documents");
}

#[tokio::test]
async fn test_dir_listing() {
    let (_api, mut shell) = shell();

    let listing = shell.execute("dir").await.text();
    assert!(listing.contains(" Directory of C:\\My Documents"));
    assert!(listing.contains("readme.txt"));
    assert!(listing.contains("3 file(s)"));
    assert!(listing.contains("0 dir(s)      1,457,664 bytes free"));

    let root = shell.execute("dir \\").await.text();
    assert!(root.contains("<DIR>          WINDOWS"));

    let missing = shell.execute("dir nowhere").await;
    assert_eq!(missing.text(), "File Not Found");
}

#[tokio::test]
async fn test_type_prints_file() {
    let (_api, mut shell) = shell();

    let outcome = shell.execute("type readme.txt").await;
    assert!(outcome.text().starts_with("Welcome to Windows 98!"));

    assert_eq!(
        shell.execute("type").await.text(),
        "The syntax of the command is incorrect."
    );
    assert_eq!(
        shell.execute("type missing.txt").await.text(),
        "The system cannot find the file specified."
    );
}

#[tokio::test]
async fn test_md_copy_move_del_rd() {
    let (api, mut shell) = shell();

    assert!(!shell.execute("md Backup").await.is_error());
    assert!(api.exists("C:\\My Documents\\Backup"));

    let copied = shell.execute("copy readme.txt Backup").await;
    assert_eq!(copied.text(), "        1 file(s) copied.");
    assert!(api.exists("C:\\My Documents\\Backup\\readme.txt"));

    let moved = shell.execute("move index.html \"Backup\\page.html\"").await;
    assert_eq!(moved.text(), "        1 file(s) moved.");
    assert!(!api.exists("C:\\My Documents\\index.html"));
    assert!(api.exists("C:\\My Documents\\Backup\\page.html"));

    let refused = shell.execute("rd Backup").await;
    assert!(refused.is_error());
    assert!(refused.text().starts_with("Error removing directory:"));

    shell.execute("del Backup\\readme.txt").await;
    shell.execute("erase Backup\\page.html").await;
    assert!(!shell.execute("rmdir Backup").await.is_error());
    assert!(!api.exists("C:\\My Documents\\Backup"));
}

#[tokio::test]
async fn test_transfer_errors() {
    let (_api, mut shell) = shell();

    assert_eq!(
        shell.execute("copy readme.txt").await.text(),
        "The syntax of the command is incorrect."
    );
    let outcome = shell.execute("copy missing.txt x.txt").await;
    assert!(outcome.text().starts_with("Error copying file:"));

    let outcome = shell.execute("md readme.txt").await;
    assert!(outcome.text().starts_with("Error creating directory:"));

    let outcome = shell.execute("del ghost.txt").await;
    assert!(outcome.text().starts_with("Error deleting file:"));
}

#[tokio::test]
async fn test_variables() {
    let (_api, mut shell) = shell();

    shell.execute("set greeting=hello").await;
    assert_eq!(shell.variable("GREETING"), Some("hello"));
    assert_eq!(shell.execute("echo %Greeting% world").await.text(), "hello world");
    assert_eq!(shell.execute("set greeting").await.text(), "GREETING=hello");

    shell.execute("echo NAME=dos").await;
    assert_eq!(shell.variable("name"), Some("dos"));

    shell.execute("set greeting=").await;
    let missing = shell.execute("set greeting").await;
    assert!(missing.is_error());
    assert_eq!(missing.text(), "Environment variable greeting not defined");

    let all = shell.execute("set").await.text();
    assert!(all.contains("COMSPEC=C:\\WINDOWS\\COMMAND.COM"));
    assert!(all.contains("NAME=dos"));
}

#[tokio::test]
async fn test_misc_commands() {
    let (_api, mut shell) = shell();

    assert!(shell.execute("cls").await.clear_screen);
    assert_eq!(
        shell.execute("ver").await.text(),
        "Microsoft Windows 98 [Version 4.10.1998]"
    );
    assert!(shell.execute("date").await.text().starts_with("Current date is "));
    assert!(shell.execute("time").await.text().starts_with("Current time is "));
    assert!(shell.execute("help").await.text().contains("DIR"));

    let bad = shell.execute("format c:").await;
    assert_eq!(bad.lines[0].kind, LineKind::Error);
    assert_eq!(bad.text(), "Bad command or file name");

    assert!(shell.execute("   ").await.lines.is_empty());
    assert_eq!(shell.history().len(), 6);
}

#[tokio::test]
async fn test_exit_closes_attached_window() {
    let api = SystemApi::new(SystemConfig::instant());
    let mut shell = CommandPrompt::open(api.clone()).unwrap();

    let instance = shell.instance().cloned().unwrap();
    assert_eq!(api.active_app(), Some(instance));

    let outcome = shell.execute("exit").await;
    assert!(outcome.exit);
    assert!(api.open_apps().is_empty());
    assert!(shell.instance().is_none());
}
