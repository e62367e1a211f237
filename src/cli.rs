use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn get_version() -> &'static str {
    const BASE_VERSION: &str = env!("CARGO_PKG_VERSION");

    // Release builds carry the tag at HEAD
    if let Some(tag) = option_env!("VSPROBE_GIT_TAG") {
        return tag;
    }

    let commit = option_env!("VSPROBE_GIT_COMMIT").unwrap_or("unknown");
    let branch = option_env!("VSPROBE_GIT_BRANCH").unwrap_or("unknown");

    // Leaked once at startup
    let version = format!("v{}-{} ({})", BASE_VERSION, commit, branch);
    Box::leak(version.into_boxed_str())
}

#[derive(Parser)]
#[command(name = "vsprobe")]
#[command(about = "Discover installed Visual Studio editions from the Windows registry")]
#[command(version = get_version(), propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for discovered editions
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Append the install directory to each plain-format line
    #[arg(long, global = true)]
    pub show_paths: bool,

    /// Read a JSON registry snapshot instead of the live registry
    #[arg(long, value_name = "FILE", global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Discover installed editions (default)
    Discover,

    /// List the versions and editions that are probed
    ListKnown,

    /// Show the current version
    Version,
}
