//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// GCPの認証情報とプロジェクトIDを解決するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gcp-resolver")]
#[command(about = "Resolve GCP credentials and project id for BigQuery clients", long_about = None)]
pub struct Args {
    /// Explicit project id (detected from the environment when omitted)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Service account key file
    #[arg(long)]
    pub credentials: Option<String>,

    /// Config file path (defaults to ./.gcp-resolver/config.json when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Build the BigQuery client config to verify the credential is accepted
    #[arg(long)]
    pub verify: bool,

    /// Enable SDK debug output
    #[arg(long)]
    pub debug: bool,
}
