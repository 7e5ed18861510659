//! Parser limits

use crate::error::{Error, ErrorKind, Result, Span};

/// Configuration for the scanner and tree builder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of simultaneously open elements (0 means unlimited)
    pub max_depth: usize,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: usize, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    pub(crate) fn check_size(&self, len: usize) -> Result<()> {
        if self.max_size > 0 && len > self.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded { max: self.max_size },
                Span::empty(),
            ));
        }
        Ok(())
    }
}
