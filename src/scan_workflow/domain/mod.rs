pub mod finding;
pub mod project;
pub mod report;
pub mod submission;

pub use finding::{AffectedComponent, Finding, VulnerabilityRecord, UNKNOWN_SEVERITY};
pub use project::{ProjectId, ProjectIdentity, ProjectSummary};
pub use report::VulnerabilityReport;
pub use submission::{BomSubmission, SbomDocument, SubmissionToken, UploadReceipt};
