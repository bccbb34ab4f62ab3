use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish argument mistakes from
/// failed scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report saved, or the project has no findings
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (rejected upload, timeout, API error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while running a scan against the analysis server.
///
/// Every variant aborts the run. The workflow never retries or swallows
/// one of these, so callers can downcast an `anyhow::Error` to find out
/// which step failed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("SBOM upload was rejected by the server (status {status})\nResponse body: {body}\n\n💡 Hint: Check the API key permissions (BOM_UPLOAD, PROJECT_CREATION_UPLOAD) and that the SBOM is a valid CycloneDX or SPDX document")]
    SubmissionRejected { status: u16, body: String },

    #[error("SBOM processing did not finish after {attempts} status checks ({waited:?})\n\n💡 Hint: The server may be busy. Try again later or raise --poll-attempts / --poll-interval")]
    ProcessingTimeout { attempts: u32, waited: Duration },

    #[error("Project not found: {name} {version}\n\n💡 Hint: Verify that the SBOM upload created the project and that the API key can view it")]
    ProjectNotFound { name: String, version: String },

    #[error("Project lookup is ambiguous: {matches} projects match {name} {version}\n\n💡 Hint: Remove the duplicate projects on the server so the name/version pair is unique")]
    AmbiguousProject {
        name: String,
        version: String,
        matches: usize,
    },

    #[error("Request to {endpoint} failed with status {status}\nResponse body: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Request to {endpoint} failed\nDetails: {details}\n\n💡 Hint: Check that the server URL is correct and the API server is reachable")]
    Transport { endpoint: String, details: String },

    #[error("Unexpected response from {endpoint}\nDetails: {details}")]
    MalformedResponse { endpoint: String, details: String },

    #[error("Failed to read SBOM: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("No API key configured\n\n💡 Hint: Set the DT_API_KEY environment variable or pass --api-key")]
    MissingApiKey,

    /// Validation error for configuration and domain values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
