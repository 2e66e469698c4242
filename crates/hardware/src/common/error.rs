//! Simulator error definitions.
//!
//! The datapath itself has no failure modes: every instruction word produces a
//! control bundle and every tick completes. Errors only arise on the outer
//! surfaces that feed it:
//! 1. **Program Images:** Files that cannot be read or do not fit the memory.
//! 2. **Configuration:** JSON that does not parse or describes an impossible machine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the loader, configuration and simulator surfaces.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors reported while preparing or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A program or data image could not be read from disk.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An image's byte length is not a whole number of 32-bit words.
    #[error("image length {len} is not a multiple of 4 bytes")]
    UnalignedImage {
        /// Length of the image in bytes.
        len: usize,
    },

    /// An image holds more words than the target memory can store.
    #[error("image of {words} words does not fit a memory of {capacity} words")]
    ImageTooLarge {
        /// Number of words in the image.
        words: usize,
        /// Depth of the target memory in words.
        capacity: usize,
    },

    /// Configuration JSON failed to parse.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but describes an impossible machine.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
