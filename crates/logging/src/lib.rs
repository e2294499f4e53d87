#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system shared by the pagelinks
//! workspace. Diagnostics are grouped into info and debug categories, each
//! with an independent level, so callers can raise the verbosity of page
//! discovery without also enabling traversal internals. The configuration is
//! stored per thread; the tool is single-threaded, so one `init` call at
//! startup covers the whole run.
//!
//! # Design
//!
//! - [`InfoFlag`] and [`DebugFlag`] name the diagnostic categories.
//! - [`InfoLevels`] and [`DebugLevels`] hold a level per flag.
//! - [`VerbosityConfig`] combines both and maps repeated `-v` occurrences to
//!   a fixed set of levels via [`VerbosityConfig::from_verbose_level`].
//! - [`init`] installs a configuration; [`info_gte`] and [`debug_gte`] are
//!   the gate checks used by [`info_log!`] and [`debug_log!`].
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, InfoFlag, info_gte, init};
//!
//! init(VerbosityConfig::from_verbose_level(1));
//! assert!(info_gte(InfoFlag::Name, 1));
//! assert!(!info_gte(InfoFlag::Name, 2));
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;

pub use crate::config::VerbosityConfig;
pub use crate::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use crate::thread_local::{debug_gte, info_gte, init};
