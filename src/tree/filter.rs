//! Entry filtering for tree walking

use super::config::WalkerConfig;
use super::entry::Entry;

/// Per-entry inclusion rules.
///
/// Hidden entries are excluded unless `show_hidden` is set, and non-directories
/// are excluded when `dirs_only` is set. The rules are independent and both
/// must pass. Roots are never filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileFilter {
    show_hidden: bool,
    dirs_only: bool,
}

impl FileFilter {
    pub fn new(show_hidden: bool, dirs_only: bool) -> Self {
        Self {
            show_hidden,
            dirs_only,
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(config.show_hidden, config.dirs_only)
    }

    /// Check if an entry should be included.
    pub fn is_included(&self, entry: &Entry) -> bool {
        (self.show_hidden || !entry.is_hidden()) && (!self.dirs_only || entry.is_dir())
    }

    /// Keep the entries that pass, preserving listing order.
    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|entry| self.is_included(entry))
            .collect()
    }
}
