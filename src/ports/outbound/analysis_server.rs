use crate::scan_workflow::domain::{
    BomSubmission, Finding, ProjectId, ProjectIdentity, ProjectSummary, SubmissionToken,
    UploadReceipt,
};
use crate::shared::Result;
use async_trait::async_trait;

/// AnalysisServer port for the vulnerability-analysis service
///
/// One method per endpoint the scan workflow calls. Implementations
/// translate transport failures and non-success statuses into errors,
/// with one exception: `upload_bom` hands back the raw status so the
/// workflow can decide whether the submission was accepted.
#[async_trait]
pub trait AnalysisServer: Send + Sync {
    /// Uploads an SBOM, creating the project when `auto_create` is set
    ///
    /// # Returns
    /// The response status and body, plus the token when the body carries one
    ///
    /// # Errors
    /// Returns an error only when no response was received at all
    async fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadReceipt>;

    /// Reports whether the server is still processing the submission
    ///
    /// # Errors
    /// Returns an error if the request fails or the status is not a success
    async fn is_processing(&self, token: &SubmissionToken) -> Result<bool>;

    /// Lists the projects the server returns for a name/version lookup
    ///
    /// No filtering or uniqueness check happens here; an empty list is a
    /// valid answer.
    async fn find_projects(&self, identity: &ProjectIdentity) -> Result<Vec<ProjectSummary>>;

    /// Fetches every vulnerability finding recorded for a project
    ///
    /// # Errors
    /// Returns an error if the request fails or the status is not a success
    async fn fetch_findings(&self, project_id: &ProjectId) -> Result<Vec<Finding>>;
}
