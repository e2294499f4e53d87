use crate::error::WalkError;
use crate::walker::Walker;
use std::path::PathBuf;

/// Configures a filesystem traversal rooted at a specific path.
///
/// The defaults suit a general traversal: hidden entries are reported and
/// symlinks are not followed. Page discovery enables both options.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    skip_hidden: bool,
    follow_symlinks: bool,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            skip_hidden: false,
            follow_symlinks: false,
        }
    }

    /// Configures whether hidden entries should be filtered out.
    ///
    /// When enabled, any entry whose file name begins with `.` is discarded
    /// before the directory listing is sorted: hidden directories are not
    /// descended into and hidden files are never yielded. The root itself is
    /// exempt; only entries discovered during traversal are filtered.
    #[must_use]
    pub const fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Configures whether directory symlinks should be traversed.
    ///
    /// The walker always yields the symlink entry itself. When this option is
    /// enabled and the symlink points to a directory, the walker also descends
    /// into the target directory while maintaining the symlink's relative path
    /// in emitted [`crate::WalkEntry`] values. Canonical paths are tracked to
    /// prevent infinite loops.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// Fails with [`WalkError::Root`] when the root does not name a readable
    /// directory (or, with symlink following enabled, a symlink to one).
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.skip_hidden, self.follow_symlinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_builder() {
        let builder = WalkBuilder::new("/some/path");
        let _ = format!("{builder:?}");
    }

    #[test]
    fn builder_chain() {
        let builder = WalkBuilder::new("/path")
            .skip_hidden(true)
            .follow_symlinks(true);
        let _ = format!("{builder:?}");
    }

    #[test]
    fn clone_works() {
        let builder = WalkBuilder::new("/path").skip_hidden(true);
        let cloned = builder.clone();
        let _ = format!("{cloned:?}");
    }
}
