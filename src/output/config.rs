//! Output configuration types

/// How node sizes are shown, if at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeFormat {
    #[default]
    Hidden,
    /// Exact byte count
    Bytes,
    /// Scaled with a K/M/G/T unit
    Human,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Draw branch glyphs before each name
    pub show_prefix: bool,
    /// Print the full path instead of the basename
    pub full_path: bool,
    pub permissions: bool,
    pub owner: bool,
    pub size: SizeFormat,
    /// Show last modification date
    pub date: bool,
}

impl OutputConfig {
    /// Whether any bracketed info column is shown before names.
    pub fn has_info(&self) -> bool {
        self.permissions || self.owner || self.size != SizeFormat::Hidden || self.date
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_prefix: true,
            full_path: false,
            permissions: false,
            owner: false,
            size: SizeFormat::Hidden,
            date: false,
        }
    }
}
