use crate::scan_workflow::domain::ProjectIdentity;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use base64::Engine;
use std::fmt;

/// Status codes the upload endpoint answers with when it queues a BOM
pub const ACCEPTED_STATUS_CODES: [u16; 2] = [200, 202];

/// Raw SBOM bytes, read once and sent verbatim
///
/// The content is never parsed; the server decides whether it is a
/// CycloneDX or SPDX document.
#[derive(Clone, PartialEq, Eq)]
pub struct SbomDocument(Vec<u8>);

impl SbomDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Standard (padded) base64, the encoding the upsert endpoint expects in `bom`
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

impl fmt::Debug for SbomDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SbomDocument({} bytes)", self.0.len())
    }
}

/// Everything the upsert request carries
#[derive(Debug, Clone)]
pub struct BomSubmission {
    pub project: ProjectIdentity,
    pub auto_create: bool,
    pub document: SbomDocument,
}

impl BomSubmission {
    /// Builds a submission that lets the server create the project when missing
    pub fn new(project: ProjectIdentity, document: SbomDocument) -> Self {
        Self {
            project,
            auto_create: true,
            document,
        }
    }
}

/// Opaque handle for one queued analysis, valid only for the current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionToken(String);

impl SubmissionToken {
    /// Tokens are placed in a URL path, so anything that is not a plain
    /// path segment is refused.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        validate_path_segment(&token, "Submission token")?;
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the upload endpoint answered, before acceptance is decided
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub status: u16,
    pub body: String,
    /// Token parsed from the body, when the body carried one
    pub token: Option<String>,
}

impl UploadReceipt {
    pub fn new(status: u16, body: String, token: Option<String>) -> Self {
        Self {
            status,
            body,
            token,
        }
    }

    pub fn is_accepted(&self) -> bool {
        ACCEPTED_STATUS_CODES.contains(&self.status)
    }
}
