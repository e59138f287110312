use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// # Program
/// An immutable ROM image together with where it came from.
///
/// Bytes are only ever read; reading past the end yields `None` rather than
/// panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    name: String,
    code: Vec<u8>,
}

impl Program {
    /// Reads a ROM from disk.
    ///
    /// # Arguments
    /// * `path` location of a raw CHIP-8 binary
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let code = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Program::from_bytes(path.display().to_string(), code)
    }

    /// Wraps ROM bytes that were obtained some other way.
    ///
    /// # Arguments
    /// * `name` an identity for the program, used in diagnostics
    /// * `code` the raw ROM bytes
    pub fn from_bytes<S: Into<String>>(name: S, code: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if code.is_empty() {
            return Err(Error::EmptyProgram { name });
        }
        Ok(Program { name, code })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn byte_at_offset(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }
}
