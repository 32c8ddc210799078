use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Why an include walk was cut short
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionCause {
    /// The file is already being expanded further up the chain
    Cycle,
    /// Nesting went past the configured limit
    Depth(usize),
}

impl fmt::Display for RecursionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle => write!(f, "include cycle"),
            Self::Depth(limit) => write!(f, "include depth exceeds {limit}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AmalgamError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("recursion limit exceeded at {} ({cause}): {}", .path.display(), format_chain(.chain))]
    RecursionLimitExceeded {
        path: PathBuf,
        cause: RecursionCause,
        chain: Vec<PathBuf>,
    },
}

impl AmalgamError {
    /// Map an I/O failure on `path` to `FileNotFound` or `Io`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// The path the failure is about
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound { path }
            | Self::Io { path, .. }
            | Self::RecursionLimitExceeded { path, .. } => path,
        }
    }
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type Result<T, E = AmalgamError> = std::result::Result<T, E>;
