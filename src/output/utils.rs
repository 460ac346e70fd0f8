//! Shared utility functions for output formatting

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::tree::TreeNode;

use super::config::{OutputConfig, SizeFormat};

const KILO: u64 = 1 << 10;
const MEGA: u64 = KILO << 10;
const GIGA: u64 = MEGA << 10;
const TERA: u64 = GIGA << 10;

/// Format a size in bytes to a fixed-width human-readable form.
///
/// A unit is used only once the size is strictly larger than it, so 1024
/// bytes stays `  1024B`.
pub fn human_size(bytes: u64) -> String {
    let (divisor, unit) = match bytes {
        b if b > TERA => (TERA, 'T'),
        b if b > GIGA => (GIGA, 'G'),
        b if b > MEGA => (MEGA, 'M'),
        b if b > KILO => (KILO, 'K'),
        b => return format!("{:6}B", b),
    };
    format!("{:6.1}{}", bytes as f64 / divisor as f64, unit)
}

/// Format a modification time as `YYYY.MM.DD HH:MM` in local time.
pub fn format_date(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t)
            .format("%Y.%m.%d %H:%M")
            .to_string(),
        None => format!("{:16}", "?"),
    }
}

/// Build the bracketed info column for a node (without the brackets).
///
/// Fields appear in a fixed order: permissions, owner, size, date.
pub fn info_column(node: &TreeNode, config: &OutputConfig) -> String {
    let mut info = String::new();

    if config.permissions {
        info.push_str(&node.permissions());
    }
    if config.owner {
        push_field(&mut info, "  ", &format!("{:<10}", node.owner()));
    }
    match config.size {
        SizeFormat::Hidden => {}
        SizeFormat::Bytes => push_field(&mut info, " ", &format!("{:10}", node.size())),
        SizeFormat::Human => push_field(&mut info, " ", &human_size(node.size())),
    }
    if config.date {
        push_field(&mut info, "  ", &format_date(node.modified()));
    }
    info
}

fn push_field(info: &mut String, separator: &str, field: &str) {
    if !info.is_empty() {
        info.push_str(separator);
    }
    info.push_str(field);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(0), "     0B");
        assert_eq!(human_size(10), "    10B");
        assert_eq!(human_size(1024), "  1024B");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(1025), "   1.0K");
        assert_eq!(human_size(1536), "   1.5K");
        assert_eq!(human_size(5 * MEGA), "   5.0M");
        assert_eq!(human_size(3 * GIGA + GIGA / 2), "   3.5G");
        assert_eq!(human_size(2 * TERA), "   2.0T");
    }

    #[test]
    fn test_format_date_shape() {
        let date = format_date(Some(SystemTime::now()));
        assert_eq!(date.len(), 16);
        assert_eq!(&date[4..5], ".");
        assert_eq!(&date[7..8], ".");
        assert_eq!(&date[13..14], ":");
    }

    #[test]
    fn test_format_date_unknown() {
        assert_eq!(format_date(None).len(), 16);
    }
}
