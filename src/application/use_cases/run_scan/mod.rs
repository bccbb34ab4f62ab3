use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{AnalysisServer, OutputPresenter, ProgressReporter, SbomReader, Sleeper};
use crate::scan_workflow::domain::{
    BomSubmission, ProjectId, ProjectIdentity, SubmissionToken, VulnerabilityReport,
};
use crate::scan_workflow::policies::RetryPolicy;
use crate::scan_workflow::services::{FindingFlattener, ProjectResolver};
use crate::shared::error::ScanError;
use crate::shared::Result;
use std::path::Path;

/// Printed instead of writing a report when the project has no findings
pub const NO_FINDINGS_HINT: &str = "No vulnerabilities found or project not analyzed correctly.\n\
Try verifying if the SBOM was uploaded successfully and matches known vulnerable packages.\n";

/// RunScanUseCase - Upload, wait, resolve and collect in one run
///
/// Orchestrates the four steps of a scan against an analysis server,
/// strictly in order. Any failure aborts the run; nothing is retried
/// except the bounded status polling.
///
/// # Type Parameters
/// * `S` - AnalysisServer implementation
/// * `R` - SbomReader implementation
/// * `W` - OutputPresenter implementation receiving the serialized report
/// * `PR` - ProgressReporter implementation
/// * `C` - Sleeper implementation used between status checks
pub struct RunScanUseCase<S, R, W, PR, C> {
    server: S,
    sbom_reader: R,
    report_presenter: W,
    progress_reporter: PR,
    sleeper: C,
}

impl<S, R, W, PR, C> RunScanUseCase<S, R, W, PR, C>
where
    S: AnalysisServer,
    R: SbomReader,
    W: OutputPresenter,
    PR: ProgressReporter,
    C: Sleeper,
{
    /// Creates a new RunScanUseCase with injected dependencies
    pub fn new(
        server: S,
        sbom_reader: R,
        report_presenter: W,
        progress_reporter: PR,
        sleeper: C,
    ) -> Self {
        Self {
            server,
            sbom_reader,
            report_presenter,
            progress_reporter,
            sleeper,
        }
    }

    /// Executes the scan workflow
    ///
    /// The report is presented only when it has at least one record.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Submit
        self.progress_reporter.report("📤 Uploading SBOM...");
        let token = self.submit(&request.sbom_path, &request.project).await?;

        // Step 2: Await
        self.progress_reporter
            .report("⏳ Waiting for analysis to complete...");
        self.await_processing(&token, &request.retry_policy).await?;

        // Step 3: Resolve
        self.progress_reporter
            .report("🔎 Fetching vulnerability results...");
        let project_id = self.resolve_project(&request.project).await?;

        // Step 4: Collect
        let report = self.collect_findings(&project_id).await?;
        let report_saved = self.save_report(&report)?;

        Ok(ScanResponse::new(project_id, report, report_saved))
    }

    /// Reads the SBOM and uploads it, returning the submission token
    ///
    /// # Errors
    /// - `SubmissionRejected` when the server answers with anything but 200/202
    /// - `MalformedResponse` when an accepted upload carries no usable token
    pub async fn submit(
        &self,
        sbom_path: &Path,
        project: &ProjectIdentity,
    ) -> Result<SubmissionToken> {
        let document = self.sbom_reader.read_sbom(sbom_path)?;
        self.progress_reporter.report(&format!(
            "   - Read {} bytes from {}",
            document.len(),
            sbom_path.display()
        ));

        let submission = BomSubmission::new(project.clone(), document);
        let receipt = self.server.upload_bom(&submission).await?;

        self.progress_reporter.report(&format!(
            "   - Upload response status: {}",
            receipt.status
        ));
        self.progress_reporter
            .report(&format!("   - Upload response body: {}", receipt.body));

        if !receipt.is_accepted() {
            return Err(ScanError::SubmissionRejected {
                status: receipt.status,
                body: receipt.body,
            }
            .into());
        }

        let token = receipt.token.ok_or_else(|| ScanError::MalformedResponse {
            endpoint: "BOM upload".to_string(),
            details: format!("response did not contain a token: {}", receipt.body),
        })?;

        SubmissionToken::new(token).map_err(|e| {
            ScanError::MalformedResponse {
                endpoint: "BOM upload".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Polls the processing status until the server is done
    ///
    /// Each attempt waits `policy.delay()` first, then checks once. At most
    /// `policy.max_attempts()` checks are made.
    ///
    /// # Errors
    /// - `ProcessingTimeout` once every attempt saw the submission still processing
    /// - Any error from the status check itself, immediately
    pub async fn await_processing(
        &self,
        token: &SubmissionToken,
        policy: &RetryPolicy,
    ) -> Result<()> {
        let total = policy.max_attempts() as usize;

        for attempt in policy.attempts() {
            self.sleeper.sleep(policy.delay()).await;
            self.progress_reporter.report_progress(
                attempt as usize,
                total,
                Some("Waiting for analysis"),
            );

            let processing = match self.server.is_processing(token).await {
                Ok(processing) => processing,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Status check {} failed", attempt));
                    return Err(e);
                }
            };

            if !processing {
                self.progress_reporter.report_completion(&format!(
                    "✅ Analysis completed after {} status check(s)",
                    attempt
                ));
                return Ok(());
            }
        }

        self.progress_reporter.report_error(&format!(
            "❌ Analysis still in progress after {} status check(s)",
            total
        ));

        Err(ScanError::ProcessingTimeout {
            attempts: policy.max_attempts(),
            waited: policy.total_wait(),
        }
        .into())
    }

    /// Looks up the project's identifier by its exact name and version
    ///
    /// # Errors
    /// - `ProjectNotFound` when nothing matches
    /// - `AmbiguousProject` when more than one project matches
    pub async fn resolve_project(&self, project: &ProjectIdentity) -> Result<ProjectId> {
        let candidates = self.server.find_projects(project).await?;
        let project_id = ProjectResolver::resolve(project, &candidates)?;

        self.progress_reporter
            .report(&format!("   - Project {} resolved to {}", project, project_id));

        Ok(project_id)
    }

    /// Fetches the project's findings and flattens them into a report
    pub async fn collect_findings(&self, project_id: &ProjectId) -> Result<VulnerabilityReport> {
        let findings = self.server.fetch_findings(project_id).await?;
        let finding_count = findings.len();
        let report = FindingFlattener::flatten(findings);

        self.progress_reporter.report(&format!(
            "   - {} finding(s), {} affected component record(s)",
            finding_count,
            report.len()
        ));

        Ok(report)
    }

    /// Presents the report when it has records; returns whether it did
    fn save_report(&self, report: &VulnerabilityReport) -> Result<bool> {
        if report.is_empty() {
            return Ok(false);
        }

        self.report_presenter.present(&report.to_json()?)?;
        Ok(true)
    }
}
