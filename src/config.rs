// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use dirlist_usecase::ArenaLimits;

use crate::cli::Args;

/// Everything a run needs, assembled from argv and the environment.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directories to list, in order.
    #[builder(default = "vec![PathBuf::from(\".\")]")]
    pub paths: Vec<PathBuf>,
    /// Unrecognized options, each reported as a warning.
    #[builder(default)]
    pub unknown_flags: Vec<String>,
    /// Standard output is a terminal: draw glyphs and colors.
    #[builder(default)]
    pub interactive: bool,
    #[builder(default)]
    pub limits: ArenaLimits,
}

impl Config {
    /// Builds the listing configuration. With no path arguments the current
    /// directory is listed.
    pub fn from_args(args: Args, unknown_flags: Vec<String>, interactive: bool) -> Result<Self, ConfigBuilderError> {
        let mut builder = ConfigBuilder::default();
        builder.unknown_flags(unknown_flags).interactive(interactive);
        if !args.paths.is_empty() {
            builder.paths(args.paths);
        }
        builder.build()
    }
}
