// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use atty::Stream;
use dirlist::{
    app, cli,
    config::Config,
    version::{LICENSE, version_line},
};
use dirlist_infra::logging::{self, LOG_ENV};

fn main() -> ExitCode {
    let level = logging::level_from_env(env::var(LOG_ENV).ok().as_deref());
    if let Err(err) = logging::init(level) {
        eprintln!("dirlist: can not install the logger: {err}");
    }

    let (args, unknown) = cli::parse(env::args_os());
    // A closed stdout is not worth a diagnostic here either.
    if args.version {
        let _ = writeln!(io::stdout(), "{}", version_line());
        return ExitCode::SUCCESS;
    }
    if args.license {
        let _ = write!(io::stdout(), "{LICENSE}");
        return ExitCode::SUCCESS;
    }

    let result = Config::from_args(args, unknown, atty::is(Stream::Stdout))
        .map_err(anyhow::Error::from)
        .and_then(|config| app::run(&config));
    match result {
        Ok(report) => report.exit_code(),
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
