use crate::utils::error::Result;
use std::path::Path;

/// Where catalog documents are read from.
pub trait DocumentSource {
    fn read_document(&self, path: &Path) -> Result<Vec<u8>>;
}
