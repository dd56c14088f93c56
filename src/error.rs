//! Errors raised while loading a program image.
//!
//! Decoding itself cannot fail; only the I/O around it can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit code when the input path argument is missing (EINVAL).
pub const EXIT_MISSING_ARGUMENT: u8 = 22;

/// Process exit code when the input file cannot be opened (ENOENT).
pub const EXIT_FILE_NOT_FOUND: u8 = 2;

/// Process exit code when reading the image or writing the listing fails (EIO).
pub const EXIT_IO: u8 = 5;

/// Process exit code when the input buffer cannot be allocated.
pub const EXIT_OUT_OF_MEMORY: u8 = 99;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    #[error("out of memory: cannot allocate {size} bytes for {}", .path.display())]
    OutOfMemory { path: PathBuf, size: u64 },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}

impl LoadError {
    /// Exit code the command-line tool reports for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::Open { .. } => EXIT_FILE_NOT_FOUND,
            LoadError::OutOfMemory { .. } => EXIT_OUT_OF_MEMORY,
            LoadError::Read { .. } => EXIT_IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let open = LoadError::Open {
            path: PathBuf::from("rom.bin"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let oom = LoadError::OutOfMemory {
            path: PathBuf::from("rom.bin"),
            size: u64::MAX,
        };

        assert_eq!(open.exit_code(), EXIT_FILE_NOT_FOUND);
        assert_eq!(oom.exit_code(), EXIT_OUT_OF_MEMORY);
        assert_ne!(EXIT_MISSING_ARGUMENT, EXIT_IO);
    }

    #[test]
    fn test_messages_name_the_path() {
        let oom = LoadError::OutOfMemory {
            path: PathBuf::from("rom.bin"),
            size: 4096,
        };
        assert_eq!(
            oom.to_string(),
            "out of memory: cannot allocate 4096 bytes for rom.bin"
        );

        let open = LoadError::Open {
            path: PathBuf::from("missing.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            open.to_string(),
            "cannot open missing.bin: No such file or directory"
        );
    }
}
