//! Sibling ordering

use std::cmp::Ordering;

use super::entry::Entry;

/// Order siblings by name, optionally placing directories first.
///
/// Names compare by codepoint, so `B` sorts before `a`. The sort is stable.
pub fn sort_siblings(entries: &mut [Entry], dirs_first: bool) {
    entries.sort_by(|a, b| compare(a, b, dirs_first));
}

fn compare(a: &Entry, b: &Entry, dirs_first: bool) -> Ordering {
    let by_kind = if dirs_first {
        b.is_dir().cmp(&a.is_dir())
    } else {
        Ordering::Equal
    };
    by_kind.then_with(|| a.name.cmp(&b.name))
}
