use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;

/// Reads and writes paths on the local filesystem as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    /// Replaces the whole file in one call. Missing parent directories are an error.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data)?;
        Ok(())
    }
}
