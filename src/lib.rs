//! dtrack-scan - SBOM vulnerability scan against Dependency-Track
//!
//! This library uploads a software bill of materials to a Dependency-Track
//! API server, waits for the analysis to finish and flattens the project's
//! findings into a simple report, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_workflow`): Value types, retry policy, report flattening
//! - **Application Layer** (`application`): The scan use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dtrack_scan::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let server = DependencyTrackClient::new("http://dtrack-apiserver:8080", "odt_key")?;
//! let use_case = RunScanUseCase::new(
//!     server,
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(PathBuf::from("vuln_list.json")),
//!     StderrProgressReporter::new(),
//!     TokioSleeper::new(),
//! );
//!
//! let request = ScanRequest::new(
//!     PathBuf::from("bom.json"),
//!     ProjectIdentity::new("SBOM Scan", "1.0")?,
//!     RetryPolicy::default(),
//! );
//! let response = use_case.execute(request).await?;
//! println!("{} record(s)", response.report.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan_workflow;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::TokioSleeper;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::DependencyTrackClient;
    pub use crate::application::dto::{ScanRequest, ScanResponse};
    pub use crate::application::use_cases::{RunScanUseCase, NO_FINDINGS_HINT};
    pub use crate::ports::outbound::{
        AnalysisServer, OutputPresenter, ProgressReporter, SbomReader, Sleeper,
    };
    pub use crate::scan_workflow::domain::{
        AffectedComponent, BomSubmission, Finding, ProjectId, ProjectIdentity, ProjectSummary,
        SbomDocument, SubmissionToken, UploadReceipt, VulnerabilityRecord, VulnerabilityReport,
        UNKNOWN_SEVERITY,
    };
    pub use crate::scan_workflow::policies::RetryPolicy;
    pub use crate::scan_workflow::services::{FindingFlattener, ProjectResolver};
    pub use crate::shared::error::{ExitCode, ScanError};
    pub use crate::shared::Result;
}
