// src/cli/mod.rs
//! Command-line surface.
//!
//! Unknown options never stop a run: they are split out of argv before clap
//! sees it and reported one by one, while every remaining path is listed.

mod args;

use std::ffi::OsString;

pub use args::Args;
use clap::{CommandFactory, Parser};

/// Argument vector with unrecognized options removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitArgs {
    /// What clap parses: program name, known options, `--`, then paths.
    pub argv: Vec<OsString>,
    /// Unrecognized options, in the order given.
    pub unknown: Vec<String>,
}

enum Token<'a> {
    Separator,
    Long(&'a str),
    Short(char),
    Path,
}

fn classify(arg: &OsString) -> Token<'_> {
    let Some(text) = arg.to_str() else {
        return Token::Path;
    };
    if text == "--" {
        return Token::Separator;
    }
    if let Some(name) = text.strip_prefix("--") {
        // Every known option is a switch, so `--version=3` is not one of them.
        return Token::Long(name);
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(short), None) => Token::Short(short),
        _ => Token::Path,
    }
}

/// Separates the options clap knows from unrecognized ones.
///
/// An argument is an option when it starts with `--`, or is `-` followed by
/// exactly one character. Everything else, including a bare `-` and every
/// argument after `--`, is a path.
pub fn split_unknown_flags<I>(argv: I) -> SplitArgs
where
    I: IntoIterator<Item = OsString>,
{
    let command = Args::command();
    let known_long: Vec<&str> = command.get_arguments().filter_map(|arg| arg.get_long()).chain(["help"]).collect();
    let known_short: Vec<char> = command.get_arguments().filter_map(|arg| arg.get_short()).chain(['h']).collect();

    let mut argv = argv.into_iter();
    let mut options: Vec<OsString> = argv.next().into_iter().collect();
    let mut paths = Vec::new();
    let mut unknown = Vec::new();
    let mut literal = false;

    for arg in argv {
        if literal {
            paths.push(arg);
            continue;
        }
        match classify(&arg) {
            Token::Separator => literal = true,
            Token::Long(name) if known_long.contains(&name) => options.push(arg),
            Token::Short(short) if known_short.contains(&short) => options.push(arg),
            Token::Long(_) | Token::Short(_) => unknown.push(arg.to_string_lossy().into_owned()),
            Token::Path => paths.push(arg),
        }
    }

    options.push(OsString::from("--"));
    options.extend(paths);
    SplitArgs { argv: options, unknown }
}

/// Parses argv. Exits the process for `--help` and for malformed known
/// options, as clap does.
pub fn parse<I>(argv: I) -> (Args, Vec<String>)
where
    I: IntoIterator<Item = OsString>,
{
    let SplitArgs { argv, unknown } = split_unknown_flags(argv);
    (Args::parse_from(argv), unknown)
}
