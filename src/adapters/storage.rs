use crate::domain::ports::Storage;
use crate::utils::error::{Result, RteGenError};
use std::fs;
use std::path::Path;

/// Plain filesystem storage. Writes overwrite existing files and never create
/// missing directories.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| RteGenError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| RteGenError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
