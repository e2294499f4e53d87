use crate::entry::WalkEntry;
use crate::error::WalkError;
use logging::debug_log;
use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Depth-first iterator over the entries beneath a traversal root.
///
/// The root itself is never yielded; iteration starts with its children.
/// Each directory's listing is read eagerly, filtered for hidden names when
/// configured, and sorted before its entries are yielded, so traversal order
/// is stable across platforms. The first failure ends iteration.
pub struct Walker {
    skip_hidden: bool,
    follow_symlinks: bool,
    pending: Vec<PendingDir>,
    visited: HashSet<PathBuf>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        skip_hidden: bool,
        follow_symlinks: bool,
    ) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        debug_log!(Walk, 1, "walking tree rooted at {:?}", root);

        let file_type = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::Root {
                path: root.clone(),
                source: error,
            })?
            .file_type();

        let mut walker = Self {
            skip_hidden,
            follow_symlinks,
            pending: Vec::new(),
            visited: HashSet::new(),
            finished: false,
        };

        let root_is_dir = if file_type.is_dir() {
            true
        } else if file_type.is_symlink() && walker.follow_symlinks {
            fs::metadata(&root)
                .map_err(|error| WalkError::Root {
                    path: root.clone(),
                    source: error,
                })?
                .is_dir()
        } else {
            false
        };
        if !root_is_dir {
            return Err(WalkError::Root {
                path: root,
                source: io::ErrorKind::NotADirectory.into(),
            });
        }

        walker.descend(root, PathBuf::new())?;
        Ok(walker)
    }

    /// Queues a directory's filtered, sorted listing for iteration.
    ///
    /// Canonical paths are recorded so a directory reachable twice through
    /// symlinks is only entered once.
    fn descend(&mut self, dir: PathBuf, prefix: PathBuf) -> Result<(), WalkError> {
        let canonical = fs::canonicalize(&dir).map_err(|error| WalkError::Inspect {
            path: dir.clone(),
            source: error,
        })?;
        if !self.visited.insert(canonical) {
            debug_log!(Dup, 1, "already visited {:?}, skipping", dir);
            return Ok(());
        }

        let names = list_dir(&dir, self.skip_hidden)?;
        debug_log!(Walk, 3, "queued {} entries from {:?}", names.len(), dir);
        self.pending.push(PendingDir {
            dir,
            prefix,
            names: names.into_iter(),
        });
        Ok(())
    }

    /// Inspects one entry, queuing it for descent when it is a directory
    /// (or, when enabled, a symlink resolving to one).
    fn classify(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
    ) -> Result<WalkEntry, WalkError> {
        debug_log!(Walk, 4, "inspecting {:?}", relative_path);

        let file_type = fs::symlink_metadata(&full_path)
            .map_err(|error| WalkError::Inspect {
                path: full_path.clone(),
                source: error,
            })?
            .file_type();

        if file_type.is_dir() {
            self.descend(full_path.clone(), relative_path.clone())?;
        } else if file_type.is_symlink() && self.follow_symlinks {
            match fs::metadata(&full_path) {
                Ok(target) if target.is_dir() => {
                    let canonical =
                        fs::canonicalize(&full_path).map_err(|error| WalkError::Inspect {
                            path: full_path.clone(),
                            source: error,
                        })?;
                    self.descend(canonical, relative_path.clone())?;
                }
                Ok(_) => {}
                Err(error) => {
                    return Err(WalkError::Inspect {
                        path: full_path,
                        source: error,
                    });
                }
            }
        }

        Ok(WalkEntry {
            full_path,
            relative_path,
            file_type,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (full_path, relative_path) = {
                let top = self.pending.last_mut()?;
                match top.names.next() {
                    Some(name) => (top.dir.join(&name), top.prefix.join(&name)),
                    None => {
                        self.pending.pop();
                        continue;
                    }
                }
            };

            match self.classify(full_path, relative_path) {
                Ok(entry) => return Some(Ok(entry)),
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

/// A directory whose listing has been read but not yet fully yielded.
struct PendingDir {
    dir: PathBuf,
    prefix: PathBuf,
    names: std::vec::IntoIter<OsString>,
}

/// Reads a directory's entry names, dropping hidden ones when asked, and
/// sorts the remainder for deterministic traversal.
fn list_dir(dir: &Path, skip_hidden: bool) -> Result<Vec<OsString>, WalkError> {
    let listing = fs::read_dir(dir).map_err(|error| WalkError::List {
        path: dir.to_path_buf(),
        source: error,
    })?;

    let mut names = Vec::new();
    for entry in listing {
        let entry = entry.map_err(|error| WalkError::List {
            path: dir.to_path_buf(),
            source: error,
        })?;
        let name = entry.file_name();
        if skip_hidden && name.as_encoded_bytes().starts_with(b".") {
            debug_log!(Filter, 1, "skipping hidden entry {:?}", name);
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(|error| WalkError::Root {
            path: path.clone(),
            source: error,
        })?;
        Ok(cwd.join(path))
    }
}
