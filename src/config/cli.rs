use crate::domain::ports::DocumentSource;
use crate::utils::error::{LintError, Result};
use std::fs;
use std::path::Path;

/// Reads catalog documents straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn read_document(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| LintError::ReadError {
            path: path.to_path_buf(),
            source,
        })
    }
}
