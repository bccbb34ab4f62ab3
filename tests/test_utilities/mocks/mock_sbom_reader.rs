use dtrack_scan::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock SbomReader returning fixed content, or failing like a missing file
#[derive(Clone)]
pub struct MockSbomReader {
    content: Option<Vec<u8>>,
    pub read_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockSbomReader {
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: Some(content.to_vec()),
            read_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn missing() -> Self {
        Self {
            content: None,
            read_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        self.read_paths.lock().unwrap().push(path.to_path_buf());
        match &self.content {
            Some(content) => Ok(SbomDocument::new(content.clone())),
            None => Err(ScanError::SbomReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into()),
        }
    }
}
