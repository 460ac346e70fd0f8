//! Bottom-up size and count aggregation

use std::iter::Sum;
use std::ops::AddAssign;

/// Sizes and counts for a subtree.
///
/// A file contributes its own size and one file, a directory contributes one
/// directory and nothing else. A directory's aggregate is its own
/// contribution folded with every child's aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub size: u64,
    pub dirs: usize,
    pub files: usize,
}

impl Aggregate {
    pub fn file(size: u64) -> Self {
        Self {
            size,
            dirs: 0,
            files: 1,
        }
    }

    pub fn dir() -> Self {
        Self {
            size: 0,
            dirs: 1,
            files: 0,
        }
    }

    /// Add another subtree's totals into this one.
    pub fn fold(&mut self, other: &Aggregate) {
        self.size += other.size;
        self.dirs += other.dirs;
        self.files += other.files;
    }
}

impl AddAssign<&Aggregate> for Aggregate {
    fn add_assign(&mut self, other: &Aggregate) {
        self.fold(other);
    }
}

impl<'a> Sum<&'a Aggregate> for Aggregate {
    fn sum<I: Iterator<Item = &'a Aggregate>>(iter: I) -> Self {
        iter.fold(Aggregate::default(), |mut acc, a| {
            acc.fold(a);
            acc
        })
    }
}
