use crate::scan_workflow::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading the SBOM document to upload
pub trait SbomReader {
    /// Reads the whole SBOM at `path` into memory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is empty or exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument>;
}
