//! GCP Resolver Entry Points
//!
//! 認証情報・プロジェクトID解決の公開関数（SDK実装を組み込み済み）

use std::path::Path;
use std::sync::Arc;

use crate::adapter::auth::{EnvironmentProjectDetector, FileCredentialRepository};
use crate::adapter::bigquery::BigQueryClientOptions;
use crate::application::use_cases::build_client_options::BuildClientOptionsUseCase;
use crate::application::use_cases::resolve_project::ResolveProjectUseCase;
use crate::domain::entities::project_id::ProjectId;
use crate::domain::errors::ResolveError;

pub use crate::adapter::auth::load_credentials;

/// プロジェクトIDを解決します。
///
/// `None` または空文字列の場合は実行環境から検出します。
///
/// # Errors
///
/// どちらからも得られない場合は [`ResolveError::UnresolvedProject`]
pub async fn get_project_id(project: Option<&str>) -> Result<ProjectId, ResolveError> {
    ResolveProjectUseCase::new(Arc::new(EnvironmentProjectDetector::new()))
        .execute(project)
        .await
}

/// BigQuery のクライアント設定を組み立てます。
///
/// 認証情報ファイルが指定されていれば読み込んで設定し、
/// プロジェクトIDは [`get_project_id`] と同じ規則で解決します。
/// 返した設定は `into_client_config` / `connect` の前に自由に変更できます。
///
/// # Errors
///
/// - 認証情報の読み込みエラー（[`ResolveError::Io`] / [`ResolveError::CredentialFormat`]）
/// - プロジェクトIDが解決できない場合は [`ResolveError::UnresolvedProject`]
pub async fn build_warehouse_client_options(
    project_id: Option<&str>,
    credential_path: Option<&Path>,
) -> Result<BigQueryClientOptions, ResolveError> {
    BuildClientOptionsUseCase::new(
        Arc::new(EnvironmentProjectDetector::new()),
        Arc::new(FileCredentialRepository::new()),
    )
    .execute(project_id, credential_path)
    .await
}
