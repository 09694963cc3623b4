/*!
 * VFS Initialization
 * Builds the stock drive layout shipped with a fresh system
 */

use tracing::info;

use super::types::FileSystemNode;
use crate::core::limits::DRIVE;

const README: &str = "Welcome to Windows 98!\n\nThis is a sample text file.";
const INDEX_HTML: &str =
    "<h1>Hello from Windows 98 Browser!</h1><p>This is a local HTML file.</p>";

/// Stock drive: system folders plus a few sample documents
///
/// ```text
/// C:
/// ├── My Documents
/// │   ├── index.html
/// │   ├── my_drawing.png   (empty image placeholder)
/// │   └── readme.txt
/// ├── Program Files
/// └── WINDOWS
///     ├── SYSTEM
///     └── TEMP
/// ```
pub fn seeded_drive() -> FileSystemNode {
    let windows = FileSystemNode::folder("WINDOWS")
        .with_child(FileSystemNode::folder("SYSTEM"))
        .with_child(FileSystemNode::folder("TEMP"));

    let documents = FileSystemNode::folder("My Documents")
        .with_child(FileSystemNode::file("readme.txt", README))
        .with_child(FileSystemNode::file("index.html", INDEX_HTML))
        .with_child(FileSystemNode::file("my_drawing.png", ""));

    let drive = FileSystemNode::folder(DRIVE)
        .with_child(windows)
        .with_child(FileSystemNode::folder("Program Files"))
        .with_child(documents);

    info!(entries = drive.child_count(), "Seeded drive {}", DRIVE);
    drive
}
