//! # Project Detector Trait
//!
//! 実行環境からデフォルトのプロジェクトIDを検出する処理を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// 環境依存のプロジェクトID検出
///
/// 検出順序（認証情報ファイル、メタデータサーバーなど）は実装側のSDKに任せる
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectDetector: Send + Sync {
    /// デフォルトのプロジェクトIDを返す
    ///
    /// 検出できなかった場合は `None`
    async fn default_project_id(&self) -> Option<String>;
}
