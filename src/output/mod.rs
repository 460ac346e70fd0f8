//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Size, date and info column formatting
//! - `tree` - Line-per-node formatter with a totals line

mod config;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, SizeFormat};
pub use tree::TreeFormatter;
pub use utils::{format_date, human_size, info_column};

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::tree::{TreeWalker, WalkerConfig};

    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig {
            use_color: false,
            ..Default::default()
        }
    }

    fn sample() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/bin")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "0123456789").unwrap();
        fs::write(dir.path().join("src/bin/main.rs"), "01234").unwrap();
        fs::write(dir.path().join("README"), "abc").unwrap();
        dir
    }

    #[test]
    fn test_tree_lines_and_summary() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        let output = TreeFormatter::new(plain()).format(&[root]).unwrap();

        let root_name = dir.path().display().to_string();
        let expected = [
            root_name.as_str(),
            "    ├── src",
            "    │   ├── bin",
            "    │   │   └── main.rs",
            "    │   └── lib.rs",
            "    └── README",
            "",
            "18B used in 3 directories, 3 files",
            "",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_no_prefix() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        let config = OutputConfig {
            show_prefix: false,
            ..plain()
        };
        let output = TreeFormatter::new(config).format(&[root]).unwrap();

        assert!(output.lines().any(|l| l == "main.rs"));
        assert!(!output.contains("├── "));
    }

    #[test]
    fn test_full_path() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        let config = OutputConfig {
            full_path: true,
            ..plain()
        };
        let output = TreeFormatter::new(config).format(&[root]).unwrap();

        let lib = dir.path().join("src").join("lib.rs");
        assert!(output.contains(&format!("\n    │   └── {}\n", lib.display())));
    }

    #[test]
    fn test_size_column() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();
        let config = OutputConfig {
            size: SizeFormat::Bytes,
            ..plain()
        };
        let output = TreeFormatter::new(config).format(&[root]).unwrap();

        // Directories show the size of everything below them
        assert!(output.contains("\n    ├── [        15] src\n"));
        assert!(output.contains("\n    │   └── [        10] lib.rs\n"));
    }

    #[test]
    fn test_combined_info_column() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(&dir.path().join("README"))
            .unwrap();
        let config = OutputConfig {
            permissions: true,
            size: SizeFormat::Human,
            ..plain()
        };

        let info = info_column(&root, &config);
        assert!(info.starts_with("-rw"), "unexpected info: {}", info);
        assert!(info.ends_with("      3B"), "unexpected info: {}", info);
    }

    #[test]
    fn test_summary_across_roots() {
        let first = sample();
        let second = sample();
        let walker = TreeWalker::new(WalkerConfig::default());
        let roots = vec![
            walker.walk(first.path()).unwrap(),
            walker.walk(second.path()).unwrap(),
        ];
        let output = TreeFormatter::new(plain()).format(&roots).unwrap();
        assert!(output.ends_with("\n36B used in 6 directories, 6 files\n"));
    }

    #[test]
    fn test_color_only_when_enabled() {
        let dir = sample();
        let root = TreeWalker::new(WalkerConfig::default())
            .walk(dir.path())
            .unwrap();

        let mut buffer = termcolor::Buffer::ansi();
        TreeFormatter::new(OutputConfig::default())
            .write_tree(&mut buffer, &root)
            .unwrap();
        let colored = String::from_utf8_lossy(buffer.as_slice()).into_owned();
        assert!(colored.contains("\u{1b}["));

        let plain_output = TreeFormatter::new(plain()).format(&[root]).unwrap();
        assert!(!plain_output.contains("\u{1b}["));
    }

    #[test]
    fn test_color_choice_follows_config() {
        use termcolor::ColorChoice;

        assert_eq!(
            TreeFormatter::new(OutputConfig::default()).color_choice(),
            ColorChoice::Always
        );
        assert_eq!(
            TreeFormatter::new(plain()).color_choice(),
            ColorChoice::Never
        );
    }
}
