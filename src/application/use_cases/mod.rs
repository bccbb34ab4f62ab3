/// Use cases module containing application business logic orchestration
mod run_scan;

pub use run_scan::{RunScanUseCase, NO_FINDINGS_HINT};
