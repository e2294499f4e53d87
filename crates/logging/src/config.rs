//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugLevels, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug)]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-3+).
    ///
    /// Level 0 is silent. Level 1 reports discovered pages and the run
    /// summary. Level 2 adds traversal and filtering diagnostics. Level 3
    /// and above raise the traversal detail to per-entry granularity.
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.info.links = 1;
                config.info.misc = 1;
                config.info.name = 1;
                config.info.stats = 1;
            }
            2 => {
                config.info.links = 1;
                config.info.misc = 2;
                config.info.name = 2;
                config.info.stats = 1;
                config.debug.dup = 1;
                config.debug.exit = 1;
                config.debug.filter = 1;
                config.debug.walk = 1;
            }
            _ => {
                // Level 3+
                config.info.links = 1;
                config.info.misc = 2;
                config.info.name = 2;
                config.info.stats = 1;
                config.debug.dup = 1;
                config.debug.exit = 2;
                config.debug.filter = 2;
                config.debug.walk = 4;
            }
        }

        config
    }
}
