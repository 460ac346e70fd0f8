//! Tree formatter
//!
//! This module provides `TreeFormatter`, which writes one line per node of a
//! built tree, followed by a totals line once every root has been written.

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, WriteColor};

use crate::tree::{Aggregate, TreeNode};

use super::config::OutputConfig;
use super::utils::{human_size, info_column};

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write a single node line: prefix, optional `[info]` column, name.
    pub fn write_node<W: WriteColor>(&self, out: &mut W, node: &TreeNode) -> io::Result<()> {
        if self.config.show_prefix {
            write!(out, "{}", node.prefix())?;
        }
        if self.config.has_info() {
            write!(out, "[{}] ", info_column(node, &self.config))?;
        }

        let name = node.display_name(self.config.full_path);
        match name_color(node) {
            Some(spec) if self.config.use_color => {
                out.set_color(&spec)?;
                write!(out, "{}", name)?;
                out.reset()?;
            }
            _ => write!(out, "{}", name)?,
        }
        writeln!(out)
    }

    /// Write every node of a tree in pre-order.
    pub fn write_tree<W: WriteColor>(&self, out: &mut W, root: &TreeNode) -> io::Result<()> {
        for node in root.iter() {
            self.write_node(out, node)?;
        }
        Ok(())
    }

    /// Write the totals line accumulated over all roots.
    pub fn write_summary<W: WriteColor>(&self, out: &mut W, totals: &Aggregate) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{} used in {} directories, {} files",
            human_size(totals.size).trim(),
            totals.dirs,
            totals.files
        )
    }

    /// Format trees and their totals into a plain string without colors.
    pub fn format(&self, roots: &[TreeNode]) -> io::Result<String> {
        let mut buffer = Buffer::no_color();
        for root in roots {
            self.write_tree(&mut buffer, root)?;
        }
        let totals: Aggregate = roots.iter().map(TreeNode::aggregate).sum();
        self.write_summary(&mut buffer, &totals)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }

    /// Color mode for a terminal stream. Detection has already happened
    /// when the config was built, so enabled color is always emitted.
    pub fn color_choice(&self) -> ColorChoice {
        if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

/// Symlinks bold cyan, directories bold blue, executables bold green.
fn name_color(node: &TreeNode) -> Option<ColorSpec> {
    let color = if node.is_symlink() {
        Color::Cyan
    } else if node.is_dir() {
        Color::Blue
    } else if node.is_executable() {
        Color::Green
    } else {
        return None;
    };
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    Some(spec)
}
