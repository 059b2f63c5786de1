// src/cli/args.rs
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirlist",
    about = "Lists the contents of directories given their PATH(s).",
    long_about = "Lists the contents of directories given their PATH(s).\n\
                  If no path is provided, the current directory is considered.",
    disable_version_flag = true,
    after_help = "Set DIRLIST_LOG=debug to see entries whose metadata could not be read."
)]
pub struct Args {
    /// Directories to list
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Show its version and platform
    #[arg(long)]
    pub version: bool,

    /// Show its license
    #[arg(long)]
    pub license: bool,
}
