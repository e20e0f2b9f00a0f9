//! Input sourcing: how the file's bytes reach the address space.
//!
//! Both strategies end in a single `&[u8]` over the whole file, so the
//! partitioner and scanners are identical either way. The source must
//! outlive every scanner borrowing from it; the mapping is only dropped
//! with the source itself.

use crate::error::{ProcessingError, Result};
use crate::utils::constants::READ_BLOCK_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourcingStrategy {
    /// Map the whole file and let the page cache feed the scanners.
    #[default]
    Mmap,
    /// Sequential block reads into one owned buffer.
    Read,
}

impl SourcingStrategy {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "mmap" => Ok(SourcingStrategy::Mmap),
            "read" => Ok(SourcingStrategy::Read),
            other => Err(ProcessingError::Config(format!(
                "unknown sourcing strategy '{other}' (expected 'mmap' or 'read')"
            ))),
        }
    }
}

#[derive(Debug)]
pub enum InputSource {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl InputSource {
    pub fn open(path: &Path, strategy: SourcingStrategy) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            // Zero-length mappings are platform-dependent; an empty buffer
            // behaves the same everywhere.
            return Ok(InputSource::Owned(Vec::new()));
        }
        match strategy {
            SourcingStrategy::Mmap => {
                let mmap = unsafe { Mmap::map(&file)? };
                Ok(InputSource::Mapped(mmap))
            }
            SourcingStrategy::Read => Self::read_owned(file),
        }
    }

    fn read_owned(mut file: File) -> Result<Self> {
        let size = file.metadata()?.len() as usize;
        let mut buffer = Vec::with_capacity(size);
        let mut block = vec![0u8; READ_BLOCK_SIZE.min(size.max(1))];
        loop {
            let n = file.read(&mut block)?;
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&block[..n]);
        }
        Ok(InputSource::Owned(buffer))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            InputSource::Mapped(mmap) => &mmap[..],
            InputSource::Owned(buffer) => buffer.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strategy_names() {
        assert_eq!(SourcingStrategy::from_name("mmap").unwrap(), SourcingStrategy::Mmap);
        assert_eq!(SourcingStrategy::from_name("read").unwrap(), SourcingStrategy::Read);
        assert!(SourcingStrategy::from_name("tape").is_err());
    }

    #[test]
    fn test_both_strategies_yield_identical_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Oslo;1.2\nBergen;-3.4\n").unwrap();
        file.flush().unwrap();

        let mapped = InputSource::open(file.path(), SourcingStrategy::Mmap).unwrap();
        let owned = InputSource::open(file.path(), SourcingStrategy::Read).unwrap();
        assert_eq!(mapped.bytes(), owned.bytes());
        assert_eq!(mapped.len(), 21);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let err = InputSource::open(Path::new("/no/such/file"), SourcingStrategy::Mmap).unwrap_err();
        assert!(matches!(err, ProcessingError::Io(_)));
    }
}
