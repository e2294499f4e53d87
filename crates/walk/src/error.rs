use std::io;
use std::path::{Path, PathBuf};

/// Error returned when traversal fails.
///
/// Each variant carries the filesystem path involved, so callers can surface
/// actionable diagnostics without re-deriving context. The first failure
/// terminates iteration; there is no recovery or retry.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The traversal root is missing, unreadable, or not a directory.
    #[error("cannot search '{}': {source}", .path.display())]
    Root {
        /// The configured traversal root.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A directory's entries could not be listed.
    #[error("cannot list directory '{}': {source}", .path.display())]
    List {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// An entry's type could not be determined.
    #[error("cannot inspect '{}': {source}", .path.display())]
    Inspect {
        /// Path whose type could not be determined.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkError {
    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Root { path, .. } | Self::List { path, .. } | Self::Inspect { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn path_accessor_covers_every_variant() {
        let root = WalkError::Root {
            path: PathBuf::from("root"),
            source: io_error("boom"),
        };
        assert_eq!(Path::new("root"), root.path());

        let list = WalkError::List {
            path: PathBuf::from("dir"),
            source: io_error("boom"),
        };
        assert_eq!(Path::new("dir"), list.path());

        let inspect = WalkError::Inspect {
            path: PathBuf::from("entry"),
            source: io_error("boom"),
        };
        assert_eq!(Path::new("entry"), inspect.path());
    }

    #[test]
    fn display_names_the_failure_and_path() {
        let root = WalkError::Root {
            path: PathBuf::from("tree"),
            source: io_error("boom"),
        };
        assert_eq!("cannot search 'tree': boom", root.to_string());

        let list = WalkError::List {
            path: PathBuf::from("dir"),
            source: io_error("boom"),
        };
        assert_eq!("cannot list directory 'dir': boom", list.to_string());
    }

    #[test]
    fn source_exposes_the_underlying_io_error() {
        let error = WalkError::List {
            path: PathBuf::from("dir"),
            source: io_error("source"),
        };
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}
