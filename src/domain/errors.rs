//! # Resolve Errors
//!
//! 認証情報とプロジェクトID解決のエラー分類

use std::path::PathBuf;

use thiserror::Error;

/// プロジェクトIDが解決できなかった場合のメッセージ
pub const UNRESOLVED_PROJECT_MESSAGE: &str =
    "Could not detect Google Cloud project id from the environment. Please specify a project id.";

/// 解決処理のエラー
///
/// どのエラーも握りつぶさずに呼び出し元へ返す
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 認証情報ファイルを開けない・読めない
    #[error("failed to read credential file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// サービスアカウントのドキュメントとしてパースできない
    #[error("invalid service account credential in {}", .path.display())]
    CredentialFormat {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 明示値も環境のデフォルトも無い
    #[error("{}", UNRESOLVED_PROJECT_MESSAGE)]
    UnresolvedProject,
}

impl ResolveError {
    /// I/Oエラーかどうか
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// 認証情報のフォーマットエラーかどうか
    pub fn is_credential_format(&self) -> bool {
        matches!(self, Self::CredentialFormat { .. })
    }
}
