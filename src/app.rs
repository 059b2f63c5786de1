// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use dirlist_infra::{StdDirectorySource, SystemIdentitySource, TerminalStyleSink};
use dirlist_ports::style::StyleSink;
use dirlist_shared_kernel::PresentationError;
use dirlist_usecase::{ListDirectory, ListingContext};

use crate::config::Config;

/// Outcome of a run that did not hit a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    pub listed: usize,
    pub warnings: usize,
}

impl RunReport {
    pub fn exit_code(self) -> ExitCode {
        if self.warnings == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

/// Lists every configured path on standard output.
pub fn run(config: &Config) -> Result<RunReport> {
    let mut sink = TerminalStyleSink::stdout(config.interactive);
    run_with(config, &mut sink)
}

/// Lists every configured path on `sink`.
///
/// Unrecognized options and unlistable paths are logged as warnings and
/// the run continues. A fatal error stops it at once. When the reader of
/// the output goes away the run ends quietly with what was listed so far.
pub fn run_with(config: &Config, sink: &mut dyn StyleSink) -> Result<RunReport> {
    let mut report = RunReport::default();
    for flag in &config.unknown_flags {
        log::warn!("{}", PresentationError::UnrecognizedOption { flag: flag.clone() });
        report.warnings += 1;
    }

    let source = StdDirectorySource::new();
    let identities = SystemIdentitySource::new();
    let listing = ListDirectory::new(&source, &identities);
    let mut ctx = ListingContext::new(config.limits);

    for path in &config.paths {
        match listing.run(&mut ctx, path, sink) {
            Ok(summary) => {
                log::debug!("listed {} entries of \"{}\"", summary.entries, path.display());
                report.listed += 1;
            }
            Err(err) if !err.is_fatal() => {
                log::warn!("{err}");
                report.warnings += 1;
            }
            Err(err) if err.is_broken_pipe() => {
                log::debug!("output closed while listing \"{}\"", path.display());
                break;
            }
            Err(err) => return Err(err).with_context(|| format!("can not list \"{}\"", path.display())),
        }
    }
    Ok(report)
}
