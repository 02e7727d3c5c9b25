use std::path::PathBuf;
use thiserror::Error;

mod annotator;
pub use annotator::*;
mod stats;
pub use stats::*;

pub mod config;
pub mod sink;
pub mod source;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid usage. Pipe DAMSON output into profiler.")]
    Usage,
    #[error("Could not open {path:?} for writing")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line exceeds the {capacity} byte line buffer")]
    BufferOverflow { capacity: usize },
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => -1,
            Self::FileOpen { .. } => -2,
            Self::BufferOverflow { .. } => -3,
            Self::Io(_) => 1,
        }
    }
}
