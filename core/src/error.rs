use std::io;
use std::path::PathBuf;

/// Failures that can stop a virtual machine from being built.
///
/// Nothing that happens while stepping is an error: bad addresses wrap,
/// unknown opcodes are logged and skipped, and returning with an empty stack
/// leaves the program counter where it is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read ROM {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ROM {name:?} is empty")]
    EmptyProgram { name: String },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    ProgramTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
