use crate::scan_workflow::domain::ProjectIdentity;
use crate::scan_workflow::policies::RetryPolicy;
use std::path::PathBuf;

/// ScanRequest - Input of one scan workflow run
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path to the SBOM document to upload
    pub sbom_path: PathBuf,
    /// Project the SBOM is uploaded under and later looked up by
    pub project: ProjectIdentity,
    /// How long to wait for the server to finish processing
    pub retry_policy: RetryPolicy,
}

impl ScanRequest {
    pub fn new(sbom_path: PathBuf, project: ProjectIdentity, retry_policy: RetryPolicy) -> Self {
        Self {
            sbom_path,
            project,
            retry_policy,
        }
    }
}
