use crate::ports::outbound::SbomReader;
use crate::scan_workflow::domain::SbomDocument;
use crate::shared::error::ScanError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the SBOM from disk
///
/// The file is read as raw bytes; nothing about its format is checked.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let file_size = validate_regular_file(path, "SBOM")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read SBOM: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        if !path.exists() {
            return Err(ScanError::SbomReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        let bytes = self
            .safe_read_bytes(path)
            .map_err(|e| ScanError::SbomReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if bytes.is_empty() {
            return Err(ScanError::SbomReadError {
                path: path.to_path_buf(),
                details: "File is empty".to_string(),
            }
            .into());
        }

        Ok(SbomDocument::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_sbom_success() {
        let temp_dir = TempDir::new().unwrap();
        let sbom_path = temp_dir.path().join("bom.json");
        fs::write(&sbom_path, br#"{"bomFormat":"CycloneDX"}"#).unwrap();

        let reader = FileSystemReader::new();
        let document = reader.read_sbom(&sbom_path).unwrap();

        assert_eq!(document.as_bytes(), br#"{"bomFormat":"CycloneDX"}"#);
    }

    #[test]
    fn test_read_sbom_binary_content_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let sbom_path = temp_dir.path().join("bom.bin");
        let bytes = vec![0u8, 159, 146, 150, 255];
        fs::write(&sbom_path, &bytes).unwrap();

        let document = FileSystemReader::new().read_sbom(&sbom_path).unwrap();
        assert_eq!(document.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn test_read_sbom_not_found() {
        let reader = FileSystemReader::new();
        let result = reader.read_sbom(&PathBuf::from("/nonexistent/bom.json"));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::SbomReadError { .. })
        ));
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn test_read_sbom_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_sbom(temp_dir.path());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a regular file"));
    }

    #[test]
    fn test_read_sbom_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let sbom_path = temp_dir.path().join("bom.json");
        fs::write(&sbom_path, "").unwrap();

        let result = FileSystemReader::new().read_sbom(&sbom_path);
        assert!(result.unwrap_err().to_string().contains("File is empty"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_sbom_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("bom.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_sbom(&link);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
