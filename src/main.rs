mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ScanConfig};
use dtrack_scan::prelude::*;
use std::path::Path;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid usage)
    let args = Args::parse_args();

    // Layer settings: CLI > config file > defaults
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let config = ScanConfig::resolve(&args, config_file)?;

    let summary_reporter = StderrProgressReporter::new();
    summary_reporter.report(&format!(
        "🛡️  Scanning {} as project {} on {}",
        config.sbom_path.display(),
        config.project,
        config.server_url
    ));

    // Create adapters (Dependency Injection)
    let server = DependencyTrackClient::new(&config.server_url, &config.api_key)?;
    let use_case = RunScanUseCase::new(
        server,
        FileSystemReader::new(),
        FileSystemWriter::new(config.output_path.clone()),
        StderrProgressReporter::new(),
        TokioSleeper::new(),
    );

    let response = use_case.execute(config.scan_request()).await?;

    if response.report_saved {
        summary_reporter.report_completion(&format!(
            "✅ Saved {} vulnerabilities to {}",
            response.report.len(),
            config.output_path.display()
        ));
        for (severity, count) in response.report.severity_counts() {
            summary_reporter.report(&format!("   - {}: {}", severity, count));
        }
    } else {
        StdoutPresenter::new().present(NO_FINDINGS_HINT)?;
    }

    Ok(())
}
