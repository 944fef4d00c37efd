//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text on stdout (default).
    Human,
    /// A single pretty-printed JSON object on stdout.
    Json,
}

/// All top-level subcommands exposed by the `heapfind` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print the heapfind-core library version.
    Version,

    /// Sort integers through the indexed min-heap.
    Sort {
        /// File of whitespace-separated integers, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Remove one occurrence of this value before sorting (repeatable).
        #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
        remove: Vec<i64>,
    },

    /// Group elements into connected components from a list of pairs.
    Components {
        /// File with one `p q` pair per line, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Universe size; elements are `0..SIZE`.
        #[arg(long, value_name = "SIZE")]
        size: usize,
    },

    /// Report whether two elements end up in the same component.
    Connected {
        /// File with one `p q` pair per line, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Universe size; elements are `0..SIZE`.
        #[arg(long, value_name = "SIZE")]
        size: usize,
        /// First element.
        #[arg(value_name = "P")]
        p: usize,
        /// Second element.
        #[arg(value_name = "Q")]
        q: usize,
    },
}

/// Root CLI struct for the `heapfind` binary.
///
/// Global flags are marked `global = true` so clap propagates them to every
/// subcommand.
#[derive(Parser)]
#[command(
    name = "heapfind",
    version,
    about = "Indexed min-heap and union-find toolkit",
    long_about = "Sorts integer lists through an indexed min-heap with value removal,\n\
                  and computes connected components with a union-find."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `HEAPFIND_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "HEAPFIND_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}

impl Cli {
    /// Default log filter implied by `--quiet` / `--verbose`.
    ///
    /// `RUST_LOG`, when set, overrides this.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
