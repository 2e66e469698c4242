//! Program Image Loading.
//!
//! This module turns files on disk into memory images. It performs:
//! 1. **Binary loading:** Reads a raw binary into a byte buffer.
//! 2. **Word packing:** Packs bytes into little-endian 32-bit words, the
//!    layout instruction and data memory expect.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::{Result, SimError};

/// Bytes per memory word.
const WORD_BYTES: usize = 4;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file, or `SimError::Io` naming the path.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Packs a byte image into little-endian 32-bit words.
///
/// # Returns
///
/// `SimError::UnalignedImage` if the length is not a multiple of 4.
///
/// # Examples
///
/// ```
/// use riscy_core::sim::loader::words_from_bytes;
///
/// let words = words_from_bytes(&[0x13, 0x01, 0x11, 0x00]).unwrap();
/// assert_eq!(words, vec![0x0011_0113]);
/// ```
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(SimError::UnalignedImage { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Loads a raw binary and packs it into words.
///
/// # Arguments
///
/// * `path` - Path to a flat little-endian image.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let words = words_from_bytes(&load_binary(path)?)?;
    info!(path = %path.display(), words = words.len(), "loaded image");
    Ok(words)
}
