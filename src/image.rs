//! # Program Image
//!
//! The raw binary being disassembled. It is read once, whole, into a single
//! owned buffer and only ever lent out as a read-only slice.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Flat binary image starting at offset 0. No header is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramImage {
    bytes: Vec<u8>,
}

impl ProgramImage {
    /// Read the full contents of `path`.
    ///
    /// The buffer is reserved up front from the file's reported size so an
    /// allocation failure surfaces as [`LoadError::OutOfMemory`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // Size is only a capacity hint; read_to_end still reads to EOF
        let size = file.metadata().map(|meta| meta.len()).unwrap_or(0);
        let out_of_memory = || LoadError::OutOfMemory {
            path: path.to_path_buf(),
            size,
        };
        let capacity = usize::try_from(size).map_err(|_| out_of_memory())?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| out_of_memory())?;

        file.read_to_end(&mut bytes).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self { bytes })
    }

    /// Wrap bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for ProgramImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
