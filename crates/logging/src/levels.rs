//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfoFlag {
    /// Link emission and run summaries.
    Links,
    /// Miscellaneous operations.
    Misc,
    /// Page path reporting.
    Name,
    /// Run statistics.
    Stats,
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugFlag {
    /// Duplicate directory detection.
    Dup,
    /// Exit status and cleanup.
    Exit,
    /// Hidden-entry filtering.
    Filter,
    /// Directory traversal.
    Walk,
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug)]
pub struct InfoLevels {
    /// Link emission level.
    pub links: u8,
    /// Miscellaneous operations level.
    pub misc: u8,
    /// Page path reporting level.
    pub name: u8,
    /// Run statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Returns the level configured for `flag`.
    #[must_use]
    pub const fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Links => self.links,
            InfoFlag::Misc => self.misc,
            InfoFlag::Name => self.name,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Sets the level for `flag`.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Links => self.links = level,
            InfoFlag::Misc => self.misc = level,
            InfoFlag::Name => self.name = level,
            InfoFlag::Stats => self.stats = level,
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug)]
pub struct DebugLevels {
    /// Duplicate directory detection level.
    pub dup: u8,
    /// Exit status and cleanup level.
    pub exit: u8,
    /// Hidden-entry filtering level.
    pub filter: u8,
    /// Directory traversal level.
    pub walk: u8,
}

impl DebugLevels {
    /// Returns the level configured for `flag`.
    #[must_use]
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Dup => self.dup,
            DebugFlag::Exit => self.exit,
            DebugFlag::Filter => self.filter,
            DebugFlag::Walk => self.walk,
        }
    }

    /// Sets the level for `flag`.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Dup => self.dup = level,
            DebugFlag::Exit => self.exit = level,
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Walk => self.walk = level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_levels_get_set_roundtrip() {
        let mut levels = InfoLevels::default();
        assert_eq!(levels.get(InfoFlag::Links), 0);

        levels.set(InfoFlag::Links, 2);
        levels.set(InfoFlag::Stats, 1);
        assert_eq!(levels.get(InfoFlag::Links), 2);
        assert_eq!(levels.get(InfoFlag::Stats), 1);
        assert_eq!(levels.get(InfoFlag::Misc), 0);
    }

    #[test]
    fn debug_levels_get_set_roundtrip() {
        let mut levels = DebugLevels::default();
        assert_eq!(levels.get(DebugFlag::Walk), 0);

        levels.set(DebugFlag::Walk, 3);
        levels.set(DebugFlag::Dup, 1);
        assert_eq!(levels.get(DebugFlag::Walk), 3);
        assert_eq!(levels.get(DebugFlag::Dup), 1);
        assert_eq!(levels.get(DebugFlag::Exit), 0);
    }
}
