use crate::ports::outbound::AnalysisServer;
use crate::scan_workflow::domain::{
    AffectedComponent, BomSubmission, Finding, ProjectId, ProjectIdentity, ProjectSummary,
    SubmissionToken, UploadReceipt,
};
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dependency-Track REST API client
///
/// Implements the AnalysisServer port against the `/api/v1` endpoints.
/// Every request carries the API key in `X-Api-Key`.
///
/// # Security
/// - The API key header is marked sensitive so it never shows up in debug output
/// - Implements timeout (30 seconds per request)
/// - Does not retry failed requests; the workflow aborts on the first failure
pub struct DependencyTrackClient {
    client: Client,
    base_url: String,
}

impl DependencyTrackClient {
    const TIMEOUT_SECONDS: u64 = 30;
    const API_KEY_HEADER: &'static str = "x-api-key";

    const BOM_ENDPOINT: &'static str = "/api/v1/bom";
    const TOKEN_ENDPOINT: &'static str = "/api/v1/bom/token";
    const PROJECT_ENDPOINT: &'static str = "/api/v1/project";
    const VULNERABILITY_ENDPOINT: &'static str = "/api/v1/vulnerability/project";

    /// Creates a client for the API server at `base_url`
    ///
    /// # Errors
    /// Returns a validation error if the URL is not an absolute http(s) URL
    /// or the API key cannot be sent as a header value
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut api_key_value =
            HeaderValue::from_str(api_key).map_err(|_| ScanError::Validation {
                message: "API key contains characters that are not allowed in an HTTP header"
                    .to_string(),
            })?;
        api_key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(Self::API_KEY_HEADER, api_key_value);

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dtrack-scan/{}", version);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token_url(&self, token: &SubmissionToken) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            Self::TOKEN_ENDPOINT,
            urlencoding::encode(token.as_str())
        )
    }

    fn project_lookup_url(&self, identity: &ProjectIdentity) -> String {
        format!(
            "{}{}?name={}&version={}",
            self.base_url,
            Self::PROJECT_ENDPOINT,
            urlencoding::encode(identity.name()),
            urlencoding::encode(identity.version())
        )
    }

    fn findings_url(&self, project_id: &ProjectId) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            Self::VULNERABILITY_ENDPOINT,
            urlencoding::encode(project_id.as_str())
        )
    }

    /// Sends a GET request and decodes a successful JSON response
    ///
    /// `endpoint` names the call in error messages; it never includes the
    /// query string.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, endpoint: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let body = read_success_body(response, endpoint).await?;

        serde_json::from_str(&body).map_err(|e| {
            ScanError::MalformedResponse {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl AnalysisServer for DependencyTrackClient {
    async fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadReceipt> {
        let endpoint = format!("PUT {}", Self::BOM_ENDPOINT);
        let request = BomUploadRequest {
            project_name: submission.project.name(),
            project_version: submission.project.version(),
            auto_create: submission.auto_create,
            bom: submission.document.to_base64(),
        };

        let response = self
            .client
            .put(format!("{}{}", self.base_url, Self::BOM_ENDPOINT))
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(&endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&endpoint, e))?;

        // A rejected upload may answer with plain text, so the token is optional here
        let token = serde_json::from_str::<BomUploadResponse>(&body)
            .ok()
            .and_then(|r| r.token);

        Ok(UploadReceipt::new(status, body, token))
    }

    async fn is_processing(&self, token: &SubmissionToken) -> Result<bool> {
        let endpoint = format!("GET {}", Self::TOKEN_ENDPOINT);
        let status: BomProcessingStatus = self.get_json(&self.token_url(token), &endpoint).await?;
        Ok(status.processing)
    }

    async fn find_projects(&self, identity: &ProjectIdentity) -> Result<Vec<ProjectSummary>> {
        let endpoint = format!("GET {}", Self::PROJECT_ENDPOINT);
        let projects: Vec<DtProject> = self
            .get_json(&self.project_lookup_url(identity), &endpoint)
            .await?;

        projects
            .into_iter()
            .map(|p| -> Result<ProjectSummary> {
                let id = ProjectId::new(p.uuid).map_err(|e| ScanError::MalformedResponse {
                    endpoint: endpoint.clone(),
                    details: e.to_string(),
                })?;
                Ok(ProjectSummary::new(id, p.name, p.version))
            })
            .collect()
    }

    async fn fetch_findings(&self, project_id: &ProjectId) -> Result<Vec<Finding>> {
        let endpoint = format!("GET {}", Self::VULNERABILITY_ENDPOINT);
        let vulnerabilities: Vec<DtVulnerability> = self
            .get_json(&self.findings_url(project_id), &endpoint)
            .await?;

        Ok(vulnerabilities.into_iter().map(Finding::from).collect())
    }
}

/// Validates the server address and strips any trailing slash
fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url).map_err(|e| ScanError::Validation {
        message: format!("Invalid server URL '{}': {}", base_url, e),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ScanError::Validation {
            message: format!(
                "Invalid server URL '{}': scheme must be http or https",
                base_url
            ),
        }
        .into());
    }

    Ok(base_url.trim_end_matches('/').to_string())
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> anyhow::Error {
    ScanError::Transport {
        endpoint: endpoint.to_string(),
        details: err.to_string(),
    }
    .into()
}

/// Returns the body of a successful response, or an `UnexpectedStatus` error
async fn read_success_body(response: Response, endpoint: &str) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(endpoint, e))?;

    if !status.is_success() {
        return Err(ScanError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(body)
}

// Dependency-Track API request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BomUploadRequest<'a> {
    project_name: &'a str,
    project_version: &'a str,
    auto_create: bool,
    bom: String, // base64
}

#[derive(Debug, Deserialize)]
struct BomUploadResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BomProcessingStatus {
    #[serde(default)]
    processing: bool,
}

#[derive(Debug, Deserialize)]
struct DtProject {
    uuid: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DtVulnerability {
    #[serde(default, rename = "vulnId")]
    vuln_id: Option<String>,
    #[serde(default)]
    severity: Option<String>, // "CRITICAL", "HIGH", "MEDIUM", "LOW", "INFO", "UNASSIGNED"
    #[serde(default)]
    components: Option<Vec<DtComponent>>,
}

#[derive(Debug, Deserialize)]
struct DtComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl From<DtVulnerability> for Finding {
    fn from(vuln: DtVulnerability) -> Self {
        let components = vuln
            .components
            .unwrap_or_default()
            .into_iter()
            .map(|c| AffectedComponent::new(c.name, c.version))
            .collect();
        Finding::new(vuln.vuln_id, vuln.severity, components)
    }
}
