//! CLI entry point for twig

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use termcolor::BufferedStandardStream;
use twig::{Aggregate, OutputConfig, SizeFormat, TreeFormatter, TreeWalker, WalkerConfig};

/// Determine whether to use color output based on flags and environment.
fn should_use_color(no_color: bool) -> bool {
    if no_color {
        return false;
    }
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

// -h is taken by human-readable sizes and -v by version, so clap's own
// help/version flags are replaced with --help and -v/--version.
#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "A tree command that shows sizes, owners and permissions")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directories (or files) to display
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Display all files, including hidden ones
    #[arg(short = 'a')]
    all: bool,

    /// Display only directories
    #[arg(short = 'd')]
    dirs_only: bool,

    /// Follow symbolic links to directories
    #[arg(short = 'l')]
    follow_links: bool,

    /// Max depth to explore, 0 or less for unlimited
    #[arg(
        short = 'L',
        value_name = "LEVEL",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    level: i64,

    /// Display permissions
    #[arg(short = 'p')]
    permissions: bool,

    /// Display owner
    #[arg(short = 'u')]
    owner: bool,

    /// Display size in bytes
    #[arg(short = 's')]
    size: bool,

    /// Display size in human format
    #[arg(short = 'h')]
    human: bool,

    /// Display last modified date
    #[arg(short = 'D')]
    date: bool,

    /// Display full path on each file
    #[arg(short = 'f')]
    full_path: bool,

    /// Don't display indentations
    #[arg(short = 'i')]
    no_indent: bool,

    /// Don't display colors
    #[arg(short = 'n')]
    no_color: bool,

    /// Sort entries by name only, without grouping directories first
    #[arg(long = "no-dirs-first")]
    no_dirs_first: bool,

    /// Print this help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print the version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            show_hidden: self.all,
            dirs_only: self.dirs_only,
            follow_symlinks: self.follow_links,
            dirs_first: !self.no_dirs_first,
            ..Default::default()
        }
        .with_level(usize::try_from(self.level).unwrap_or(0))
    }

    fn output_config(&self) -> OutputConfig {
        let size = if self.human {
            SizeFormat::Human
        } else if self.size {
            SizeFormat::Bytes
        } else {
            SizeFormat::Hidden
        };
        OutputConfig {
            use_color: should_use_color(self.no_color),
            show_prefix: !self.no_indent,
            full_path: self.full_path,
            permissions: self.permissions,
            owner: self.owner,
            size,
            date: self.date,
        }
    }
}

fn main() {
    twig::logging::init();
    let args = Args::parse();

    let walker = TreeWalker::new(args.walker_config());
    let formatter = TreeFormatter::new(args.output_config());
    let mut stdout = BufferedStandardStream::stdout(formatter.color_choice());

    let mut totals = Aggregate::default();
    let mut skipped = false;

    // Each root is built, printed and dropped before the next is read
    for result in walker.walk_all(&args.paths) {
        let root = match result {
            Ok(root) => root,
            Err(e) => {
                // Keep stdout and stderr in order
                if let Err(e) = stdout.flush() {
                    exit_write_error(e);
                }
                eprintln!("twig: {}", e);
                skipped = true;
                continue;
            }
        };
        totals.fold(root.aggregate());
        if let Err(e) = formatter.write_tree(&mut stdout, &root) {
            exit_write_error(e);
        }
    }

    if let Err(e) = formatter
        .write_summary(&mut stdout, &totals)
        .and_then(|_| stdout.flush())
    {
        exit_write_error(e);
    }

    if skipped {
        process::exit(1);
    }
}

fn exit_write_error(e: std::io::Error) -> ! {
    eprintln!("twig: error writing output: {}", e);
    process::exit(1);
}
