use clap::Parser;
use std::path::PathBuf;

/// Upload an SBOM to Dependency-Track and export the project's vulnerabilities
///
/// Options left unset fall back to the config file, then to built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "dtrack-scan")]
#[command(version)]
#[command(
    about = "Upload an SBOM to Dependency-Track and export the project's vulnerabilities",
    long_about = None
)]
pub struct Args {
    /// Base URL of the Dependency-Track API server
    #[arg(short, long)]
    pub url: Option<String>,

    /// API key sent in the X-Api-Key header
    #[arg(long, env = "DT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the SBOM document to upload
    #[arg(short, long, value_name = "PATH")]
    pub sbom: Option<PathBuf>,

    /// Where to write the vulnerability report (only written when non-empty)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Project name the SBOM is uploaded under
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Project version the SBOM is uploaded under
    #[arg(long, value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Maximum number of processing status checks
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub poll_attempts: Option<u32>,

    /// Seconds to wait before each processing status check
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    /// Path to a config file (defaults to ./dtrack-scan.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
