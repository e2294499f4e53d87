#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal used by the
//! pagelinks workspace when discovering published pages. The walker
//! enumerates the entries beneath a root directory while enforcing
//! relative-path constraints so callers cannot accidentally escape the
//! configured root. Ordering is kept stable across platforms by sorting each
//! directory listing lexicographically before yielding it, so repeated runs
//! over the same tree visit entries in the same sequence regardless of the
//! underlying filesystem's iteration order.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal: whether hidden entries are
//!   filtered out and whether directory symlinks may be followed.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order, directory contents before the next sibling. The root
//!   itself is never yielded; traversal starts with its children.
//! - [`WalkError`] describes the three ways traversal can fail: an unusable
//!   root, an unlistable directory, or an uninspectable entry. Every failure
//!   carries the offending path.
//!
//! # Invariants
//!
//! - Yielded relative paths always reside within the root and never contain
//!   `..` segments.
//! - Each directory is entered at most once. When symlink following is
//!   enabled, canonical paths are tracked so cycles terminate even if a
//!   symlink points back to an ancestor directory.
//! - With hidden filtering enabled, no yielded relative path contains a
//!   component that begins with `.`: hidden directories are not descended
//!   into and hidden files are never reported.
//! - Traversal never panics; failures surface as `Err` items and end
//!   iteration.
//!
//! # Examples
//!
//! Collect the relative paths beneath a temporary tree:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("site");
//! fs::create_dir_all(root.join("demo"))?;
//! fs::write(root.join("demo/index.html"), b"<html>")?;
//!
//! let walker = WalkBuilder::new(&root).build()?;
//! let mut pages = Vec::new();
//! for entry in walker {
//!     let entry = entry?;
//!     if entry.is_regular_file() {
//!         pages.push(entry.relative_path().to_path_buf());
//!     }
//! }
//!
//! assert_eq!(pages, vec![PathBuf::from("demo/index.html")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - The `links` crate for the page collector that consumes the walker.

mod builder;
mod entry;
mod error;
mod walker;


pub use crate::builder::WalkBuilder;
pub use crate::entry::WalkEntry;
pub use crate::error::WalkError;
pub use crate::walker::Walker;
