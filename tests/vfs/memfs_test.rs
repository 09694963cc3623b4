/*!
 * MemFS Tests
 * Drive-level behavior of the in-memory tree
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use desktop_sim::vfs::{FileSystem, MemFS, VfsError, VfsPath};

fn path(raw: &str) -> VfsPath {
    VfsPath::parse(raw).unwrap()
}

fn names(fs: &MemFS, dir: &str) -> Vec<String> {
    fs.list_directory(&path(dir))
        .unwrap()
        .iter()
        .map(|n| n.name().to_string())
        .collect()
}

#[test]
fn test_seeded_documents() {
    let fs = MemFS::seeded();

    assert_eq!(
        names(&fs, "C:\\My Documents"),
        vec!["index.html", "my_drawing.png", "readme.txt"]
    );
    let readme = fs.read_file(&path("C:\\My Documents\\readme.txt")).unwrap();
    assert!(readme.starts_with("Welcome to Windows 98!"));
}

#[test]
fn test_write_overwrite_and_metadata() {
    let fs = MemFS::new();
    let file = path("C:\\notes.txt");

    fs.write_file(&file, "first").unwrap();
    fs.write_file(&file, "second draft").unwrap();

    assert_eq!(fs.read_file(&file).unwrap(), "second draft");
    let node = fs.metadata(&file).unwrap();
    assert!(node.is_file());
    assert_eq!(node.size(), Some("second draft".len()));
}

#[test]
fn test_copy_is_independent() {
    let fs = MemFS::new();
    fs.create_directory(&path("C:\\a")).unwrap();
    fs.write_file(&path("C:\\a\\x.txt"), "one").unwrap();

    fs.copy_item(&path("C:\\a"), &path("C:\\b")).unwrap();
    fs.write_file(&path("C:\\a\\x.txt"), "changed").unwrap();

    assert_eq!(fs.read_file(&path("C:\\b\\x.txt")).unwrap(), "one");
}

#[test]
fn test_move_folder_into_itself_is_rejected() {
    let fs = MemFS::new();
    fs.create_directory(&path("C:\\a")).unwrap();

    let result = fs.move_item(&path("C:\\a"), &path("C:\\a\\inner"));
    assert!(matches!(result, Err(VfsError::InvalidPath(_))));
    assert!(fs.exists(&path("C:\\a")));
}

#[test]
fn test_failed_operations_leave_tree_untouched() {
    let fs = MemFS::seeded();
    let before = names(&fs, "C:\\My Documents");

    assert!(fs
        .rename_item(&path("C:\\My Documents\\readme.txt"), "index.html")
        .is_err());
    assert!(fs.delete_item(&path("C:\\My Documents")).is_err());
    assert!(fs
        .copy_item(&path("C:\\nope.txt"), &path("C:\\My Documents\\x.txt"))
        .is_err());

    assert_eq!(names(&fs, "C:\\My Documents"), before);
}

proptest! {
    #[test]
    fn prop_written_files_are_listed(
        entries in prop::collection::btree_map(
            prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "notes", "todo"]),
            prop::sample::select(vec!["", "x", "hello world", "line1\nline2"]),
            1..6,
        )
    ) {
        let fs = MemFS::new();
        for (name, content) in &entries {
            fs.write_file(&path(&format!("C:\\{}.txt", name)), content).unwrap();
        }

        let listed: Vec<String> = fs
            .list_directory(&VfsPath::root())
            .unwrap()
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        let expected: Vec<String> = entries.keys().map(|n| format!("{}.txt", n)).collect();
        prop_assert_eq!(listed, expected);

        for (name, content) in &entries {
            let read = fs.read_file(&path(&format!("C:\\{}.txt", name))).unwrap();
            prop_assert_eq!(read.as_str(), *content);
        }
    }

    #[test]
    fn prop_move_then_move_back_restores(name in prop::sample::select(vec!["a", "b", "c", "report"])) {
        let fs = MemFS::seeded();
        let original = path("C:\\My Documents\\readme.txt");
        let moved = path(&format!("C:\\WINDOWS\\TEMP\\{}.txt", name));

        fs.move_item(&original, &moved).unwrap();
        prop_assert!(!fs.exists(&original));
        fs.move_item(&moved, &original).unwrap();

        prop_assert!(fs.exists(&original));
        prop_assert!(!fs.exists(&moved));
    }
}
