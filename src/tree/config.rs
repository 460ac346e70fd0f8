//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
///
/// Handed to [`TreeWalker::new`](super::TreeWalker::new) once; the walker
/// never changes it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Deepest level whose contents are listed, `None` for unbounded.
    /// A limit of 1 shows the root and its immediate children.
    pub max_depth: Option<usize>,
    /// Include entries whose name begins with `.`
    pub show_hidden: bool,
    /// Only include directories
    pub dirs_only: bool,
    /// Recurse through symlinks that point at directories
    pub follow_symlinks: bool,
    /// Order directories before files among siblings
    pub dirs_first: bool,
}

impl WalkerConfig {
    /// Set the depth limit using the command-line convention where 0 means unbounded.
    pub fn with_level(mut self, level: usize) -> Self {
        self.max_depth = if level == 0 { None } else { Some(level) };
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            dirs_only: false,
            follow_symlinks: false,
            dirs_first: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_is_unbounded() {
        let config = WalkerConfig::default().with_level(0);
        assert_eq!(config.max_depth, None);

        let config = WalkerConfig::default().with_level(3);
        assert_eq!(config.max_depth, Some(3));
    }
}
