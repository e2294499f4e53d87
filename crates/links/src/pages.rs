use crate::error::LinkError;
use logging::info_log;
use std::path::{Path, PathBuf};
use walk::WalkBuilder;

/// File name that marks a directory as a published page.
pub const PAGE_FILE_NAME: &str = "index.html";

/// Collects the relative paths of all pages beneath `root`.
///
/// A page is a regular file named exactly [`PAGE_FILE_NAME`]. Hidden files
/// and directories (names beginning with `.`) are excluded entirely: hidden
/// directories are not descended into, so a page below one is never
/// reported. Directory symlinks are followed, with cycle protection, so a
/// linked demo directory contributes its pages under the symlink's path;
/// symlinks to page files do not qualify.
///
/// The returned paths are relative to `root` and sorted
/// byte-lexicographically by the full path string. The first traversal
/// failure aborts collection and propagates.
pub fn collect_pages<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, LinkError> {
    let walker = WalkBuilder::new(root.as_ref())
        .skip_hidden(true)
        .follow_symlinks(true)
        .build()?;

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.is_regular_file() {
            continue;
        }
        let is_page = entry
            .relative_path()
            .file_name()
            .is_some_and(|name| name == PAGE_FILE_NAME);
        if is_page {
            info_log!(Name, 1, "{}", entry.relative_path().display());
            pages.push(entry.relative_path().to_path_buf());
        }
    }

    pages.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(pages)
}
