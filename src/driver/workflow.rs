//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::adapter::auth::{expand_key_path, EnvironmentProjectDetector, FileCredentialRepository};
use crate::adapter::config::Config;
use crate::application::use_cases::build_client_options::BuildClientOptionsUseCase;
use crate::domain::entities::project_id::ProjectId;
use crate::domain::repositories::project_detector::ProjectDetector;

use super::cli::Args;

/// CLIの値を優先し、無ければ設定ファイルの値を使う
///
/// 空文字列のCLI値は指定なしとして扱う
pub fn merge_option(cli: Option<&str>, config: Option<&str>) -> Option<String> {
    cli.filter(|v| !v.is_empty())
        .or(config)
        .map(str::to_string)
}

/// 認証情報ファイルのパスを決める
///
/// CLI・設定ファイル由来のパスは先頭の `~` をホームディレクトリに展開する
pub fn resolve_key_path(cli: Option<&str>, config: Option<&str>) -> Option<String> {
    merge_option(cli, config).map(|path| expand_key_path(&path))
}

/// 解決結果のサマリー
#[derive(Debug, Clone)]
pub struct ResolveSummary {
    /// 解決済みのプロジェクトID
    pub project_id: ProjectId,
    /// 設定された認証情報のメールアドレス（ADCの場合は `None`）
    pub credential_email: Option<String>,
    /// 認証情報ファイルを使ったかどうか
    pub uses_service_account: bool,
    /// `ClientConfig` の作成まで確認したかどうか
    pub verified: bool,
}

/// Resolve Workflow
pub struct ResolveWorkflow<D: ProjectDetector> {
    config: Config,
    use_case: BuildClientOptionsUseCase<D, FileCredentialRepository>,
}

impl ResolveWorkflow<EnvironmentProjectDetector> {
    /// SDKの環境検出を使うワークフローを作成
    pub fn new(config: Config) -> Self {
        Self::with_detector(config, Arc::new(EnvironmentProjectDetector::new()))
    }
}

impl<D: ProjectDetector> ResolveWorkflow<D> {
    /// 検出器を差し替えてワークフローを作成
    pub fn with_detector(config: Config, detector: Arc<D>) -> Self {
        let use_case =
            BuildClientOptionsUseCase::new(detector, Arc::new(FileCredentialRepository::new()));
        Self { config, use_case }
    }

    /// Execute the resolve workflow
    pub async fn execute(&self, args: &Args) -> Result<ResolveSummary> {
        let project = merge_option(args.project.as_deref(), self.config.project_id.as_deref());
        let key_path = resolve_key_path(
            args.credentials.as_deref(),
            self.config.service_account_key_path.as_deref(),
        );

        info!("Resolving project id and credentials...");

        let mut options = self
            .use_case
            .execute(project.as_deref(), key_path.as_deref().map(Path::new))
            .await?;
        options.set_debug(args.debug || self.config.debug);

        let credential_email = options
            .credential()
            .and_then(|c| c.client_email())
            .map(str::to_string);
        let uses_service_account = options.has_credential();

        let (project_id, verified) = if args.verify {
            let (_config, project_id) = options.into_client_config().await?;
            (project_id, true)
        } else {
            (options.project_id().clone(), false)
        };

        Ok(ResolveSummary {
            project_id,
            credential_email,
            uses_service_account,
            verified,
        })
    }
}
