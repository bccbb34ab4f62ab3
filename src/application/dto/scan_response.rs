use crate::scan_workflow::domain::{ProjectId, VulnerabilityReport};

/// ScanResponse - Result of a completed scan workflow run
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Identifier the server assigned to the scanned project
    pub project_id: ProjectId,
    /// Flattened findings, possibly empty
    pub report: VulnerabilityReport,
    /// Whether the report was handed to the output presenter
    /// (false exactly when the report is empty)
    pub report_saved: bool,
}

impl ScanResponse {
    pub fn new(project_id: ProjectId, report: VulnerabilityReport, report_saved: bool) -> Self {
        Self {
            project_id,
            report,
            report_saved,
        }
    }
}
