use std::io;
use std::path::PathBuf;
use walk::WalkError;

/// Errors produced while collecting pages or appending link lines.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Traversal of the page tree failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// The output file could not be opened or written.
    #[error("failed to append links to '{}': {source}", .path.display())]
    Output {
        /// Output file that failed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl LinkError {
    pub(crate) fn output(path: PathBuf, source: io::Error) -> Self {
        Self::Output { path, source }
    }
}
