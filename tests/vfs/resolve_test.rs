/*!
 * Path Resolution Tests
 */

use pretty_assertions::assert_eq;

use desktop_sim::vfs::{resolve, well_known, VfsError, VfsPath};

fn documents() -> VfsPath {
    VfsPath::parse(well_known::MY_DOCUMENTS).unwrap()
}

#[test]
fn test_resolve_relative_names() {
    let resolved = resolve(&documents(), "readme.txt").unwrap();
    assert_eq!(resolved.to_string(), "C:\\My Documents\\readme.txt");
    assert_eq!(resolved.extension().as_deref(), Some("txt"));
}

#[test]
fn test_resolve_mixed_separators() {
    let resolved = resolve(&documents(), "../WINDOWS/./TEMP").unwrap();
    assert_eq!(resolved.to_string(), well_known::TEMP);
}

#[test]
fn test_resolve_drive_letter_case() {
    let resolved = resolve(&VfsPath::root(), "c:\\windows\\system").unwrap();
    assert_eq!(resolved.to_string(), "C:\\windows\\system");
}

#[test]
fn test_resolve_rejects_bad_input() {
    assert!(matches!(resolve(&documents(), "A:\\x"), Err(VfsError::InvalidPath(_))));
    assert!(matches!(
        resolve(&documents(), "bad\0name.txt"),
        Err(VfsError::InvalidPath(_))
    ));
}
