#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `links` turns a directory tree of published demo pages into README link
//! lines. [`collect_pages`] walks the tree and returns the sorted relative
//! paths of every regular file named `index.html`, skipping hidden files and
//! directories entirely. [`LinkWriter`] renders each path as
//! `<base-url><relative-path>` and appends the lines, each followed by a
//! blank line, to the output file.
//!
//! # Design
//!
//! - [`collect_pages`] drives the `walk` crate with hidden filtering
//!   enabled. Directory symlinks are followed (the walker's visited set
//!   keeps cycles terminating), but only regular files qualify as pages.
//! - Paths are sorted byte-lexicographically by the full relative path, the
//!   same order a plain string sort would produce, rather than the
//!   component-wise ordering of [`std::path::Path`].
//! - [`LinkWriter`] opens the output file in append mode once per run and
//!   never truncates or deduplicates: re-running the tool appends the same
//!   lines again.
//!
//! # Errors
//!
//! [`LinkError`] wraps walker failures and output I/O failures. The first
//! error aborts the run; partially appended output is left in place.
//!
//! # Examples
//!
//! ```
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::create_dir(temp.path().join("demo"))?;
//! std::fs::write(temp.path().join("demo/index.html"), b"<html>")?;
//!
//! let pages = links::collect_pages(temp.path())?;
//! assert_eq!(pages, vec![std::path::PathBuf::from("demo/index.html")]);
//!
//! let writer = links::LinkWriter::new(
//!     "https://example.net/demos/",
//!     temp.path().join("README.md"),
//! );
//! let appended = writer.append_links(&pages)?;
//! assert_eq!(appended, 1);
//!
//! let readme = std::fs::read_to_string(temp.path().join("README.md"))?;
//! assert_eq!(readme, "https://example.net/demos/demo/index.html\n\n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod error;
mod pages;
mod writer;


pub use crate::error::LinkError;
pub use crate::pages::{PAGE_FILE_NAME, collect_pages};
pub use crate::writer::{DEFAULT_BASE_URL, DEFAULT_OUTPUT, LinkWriter};
