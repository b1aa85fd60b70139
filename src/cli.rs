//! Command-line interface definitions.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the winlink engine.
#[derive(Parser, Debug)]
#[command(
    name = "winlink",
    about = "Mirror Windows personal folders into a WSL git repository via symlinks",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Windows account name under the users directory (falls back to WINLINK_USER)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Windows users directory as mounted in WSL (default: /mnt/c/Users)
    #[arg(long, global = true)]
    pub users_dir: Option<std::path::PathBuf>,

    /// Repository directory that will hold the links (falls back to WINLINK_ROOT,
    /// then the current directory)
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Replace the built-in folder list (repeatable; NAME or NAME=ALIAS)
    #[arg(long = "folder", value_name = "NAME[=ALIAS]", global = true)]
    pub folders: Vec<String>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create missing folder links in the repository
    Link(LinkOpts),
    /// Remove links previously created by winlink
    Unlink(UnlinkOpts),
    /// Report the current state of every folder link
    Status(StatusOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Short name of the subcommand, used for log file naming.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Link(_) => "link",
            Self::Unlink(_) => "unlink",
            Self::Status(_) => "status",
            Self::Version => "version",
        }
    }
}

/// Options for the `link` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LinkOpts {
    /// Skip folders whose name contains any of these values
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Only process folders whose name contains any of these values
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Options for the `unlink` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct UnlinkOpts;

/// Options for the `status` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct StatusOpts {
    /// Emit machine-readable JSON instead of the human-readable table
    #[arg(long)]
    pub json: bool,
}
