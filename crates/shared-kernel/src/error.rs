// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirlistError {
    /// Adds human context while preserving original error as the source.
    /// Only the context is displayed; walk `source()` for the cause.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<DirlistError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl DirlistError {
    /// Fatal errors abort the whole run; everything else is reported as a
    /// warning and the run moves on to the next argument.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_fatal(),
            Self::Domain(_) | Self::Infrastructure(_) => true,
            Self::Application(_) | Self::Presentation(_) => false,
        }
    }

    /// Whether the reader of the listing went away, e.g. `dirlist | head`.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_broken_pipe(),
            Self::Infrastructure(InfrastructureError::OutputError { source }) => {
                source.kind() == std::io::ErrorKind::BrokenPipe
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirlistError>;

/// Domain-layer specific errors. All of them describe a violated bounded
/// resource and are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "can not allocate {requested} unit(s) on arena \"{arena}\" ({used}/{capacity} in use, exceeded by {})",
        overflow(.used, .requested, .capacity)
    )]
    ArenaCapacityExceeded {
        arena: &'static str,
        requested: usize,
        used: usize,
        capacity: usize,
    },

    #[error("can not release {requested} unit(s) from arena \"{arena}\": only {used} in use")]
    ArenaUnderflow {
        arena: &'static str,
        requested: usize,
        used: usize,
    },
}

fn overflow(used: &usize, requested: &usize, capacity: &usize) -> usize {
    (used + requested).saturating_sub(*capacity)
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors: one per listed path that could not be read.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("can not find the entry \"{}\".", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("can not open the directory \"{}\".", .path.display())]
    DirectoryNotOpenable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the entry \"{}\" is not a directory.", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Infrastructure-layer errors: output could not be written.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("output error")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("the option \"{flag}\" is unrecognized.")]
    UnrecognizedOption { flag: String },
}

impl From<std::io::Error> for DirlistError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirlistError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirlistError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DirlistError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
