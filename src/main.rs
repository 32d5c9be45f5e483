//! gcp-resolver - GCP credential and project id resolver
//!
//! BigQuery クライアント用の認証情報とプロジェクトIDを解決して表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use gcp_resolver::adapter::config::{Config, DEFAULT_CONFIG_PATH};
use gcp_resolver::driver::{Args, ResolveWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // 明示されたファイルは必須、デフォルトパスは任意
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_if_exists(DEFAULT_CONFIG_PATH)?,
    };

    let workflow = ResolveWorkflow::new(config);
    let summary = workflow.execute(&args).await?;

    println!("✓ Project: {}", summary.project_id);
    match &summary.credential_email {
        Some(email) => println!("✓ Credentials: service account {}", email),
        None if summary.uses_service_account => println!("✓ Credentials: service account"),
        None => println!("✓ Credentials: application default credentials"),
    }
    if summary.verified {
        println!("✓ BigQuery client config created");
    }

    Ok(())
}
