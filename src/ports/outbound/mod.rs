/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the scan workflow uses to reach
/// the analysis server, the file system, the console and the clock.
pub mod analysis_server;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;
pub mod sleeper;

pub use analysis_server::AnalysisServer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
pub use sleeper::Sleeper;
