use async_trait::async_trait;
use dtrack_scan::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ServerState {
    uploads: Vec<BomSubmission>,
    status_checks: Vec<String>,
    project_lookups: Vec<ProjectIdentity>,
    findings_requests: Vec<ProjectId>,
}

/// Scripted AnalysisServer for workflow tests
///
/// Processing responses are consumed in order; once the script is
/// exhausted the server reports the submission as finished.
#[derive(Clone)]
pub struct MockAnalysisServer {
    upload_status: u16,
    upload_body: String,
    upload_token: Option<String>,
    processing: Arc<Mutex<VecDeque<bool>>>,
    projects: Vec<ProjectSummary>,
    findings: Vec<Finding>,
    lookup_error: Option<String>,
    findings_error: Option<String>,
    state: Arc<Mutex<ServerState>>,
}

impl MockAnalysisServer {
    /// A server that accepts the upload with 202 and hands out `token`
    pub fn new(token: &str) -> Self {
        Self {
            upload_status: 202,
            upload_body: format!(r#"{{"token":"{}"}}"#, token),
            upload_token: Some(token.to_string()),
            processing: Arc::new(Mutex::new(VecDeque::new())),
            projects: Vec::new(),
            findings: Vec::new(),
            lookup_error: None,
            findings_error: None,
            state: Arc::new(Mutex::new(ServerState::default())),
        }
    }

    pub fn with_upload_response(mut self, status: u16, body: &str) -> Self {
        self.upload_status = status;
        self.upload_body = body.to_string();
        self
    }

    pub fn with_processing(self, responses: &[bool]) -> Self {
        *self.processing.lock().unwrap() = responses.iter().copied().collect();
        self
    }

    pub fn with_project(mut self, id: &str, name: &str, version: &str) -> Self {
        self.projects.push(ProjectSummary::new(
            ProjectId::new(id).unwrap(),
            Some(name.to_string()),
            Some(version.to_string()),
        ));
        self
    }

    pub fn with_finding(
        mut self,
        vuln_id: &str,
        severity: Option<&str>,
        components: &[(&str, &str)],
    ) -> Self {
        self.findings.push(Finding::new(
            Some(vuln_id.to_string()),
            severity.map(str::to_string),
            components
                .iter()
                .map(|(name, version)| {
                    AffectedComponent::new(Some(name.to_string()), Some(version.to_string()))
                })
                .collect(),
        ));
        self
    }

    /// Makes the project lookup fail like a transport error
    pub fn with_lookup_error(mut self, message: &str) -> Self {
        self.lookup_error = Some(message.to_string());
        self
    }

    /// Makes the findings fetch fail like a transport error
    pub fn with_findings_error(mut self, message: &str) -> Self {
        self.findings_error = Some(message.to_string());
        self
    }

    pub fn uploads(&self) -> Vec<BomSubmission> {
        self.state.lock().unwrap().uploads.clone()
    }

    pub fn status_checks(&self) -> Vec<String> {
        self.state.lock().unwrap().status_checks.clone()
    }

    pub fn project_lookups(&self) -> Vec<ProjectIdentity> {
        self.state.lock().unwrap().project_lookups.clone()
    }

    pub fn findings_requests(&self) -> Vec<ProjectId> {
        self.state.lock().unwrap().findings_requests.clone()
    }
}

#[async_trait]
impl AnalysisServer for MockAnalysisServer {
    async fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadReceipt> {
        self.state.lock().unwrap().uploads.push(submission.clone());
        Ok(UploadReceipt::new(
            self.upload_status,
            self.upload_body.clone(),
            self.upload_token.clone(),
        ))
    }

    async fn is_processing(&self, token: &SubmissionToken) -> Result<bool> {
        self.state
            .lock()
            .unwrap()
            .status_checks
            .push(token.as_str().to_string());
        Ok(self.processing.lock().unwrap().pop_front().unwrap_or(false))
    }

    async fn find_projects(&self, identity: &ProjectIdentity) -> Result<Vec<ProjectSummary>> {
        self.state
            .lock()
            .unwrap()
            .project_lookups
            .push(identity.clone());
        if let Some(message) = &self.lookup_error {
            return Err(ScanError::Transport {
                endpoint: "GET /api/v1/project".to_string(),
                details: message.clone(),
            }
            .into());
        }
        Ok(self.projects.clone())
    }

    async fn fetch_findings(&self, project_id: &ProjectId) -> Result<Vec<Finding>> {
        self.state
            .lock()
            .unwrap()
            .findings_requests
            .push(project_id.clone());
        if let Some(message) = &self.findings_error {
            return Err(ScanError::Transport {
                endpoint: "GET /api/v1/vulnerability/project".to_string(),
                details: message.clone(),
            }
            .into());
        }
        Ok(self.findings.clone())
    }
}
