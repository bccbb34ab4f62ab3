/// Mock implementations for testing
mod mock_analysis_server;
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_sbom_reader;
mod mock_sleeper;

pub use mock_analysis_server::MockAnalysisServer;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;
pub use mock_sleeper::MockSleeper;
