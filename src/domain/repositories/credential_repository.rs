//! # Credential Repository Trait
//!
//! 認証情報ファイルの読み込みを抽象化

use std::path::Path;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ResolveError;

/// 認証情報リポジトリ
///
/// 認証情報の具体的な型はAdapter層が決める
#[cfg_attr(test, automock(type Credential = String;))]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// 読み込んだ認証情報の型
    type Credential: Send;

    /// 認証情報ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが読めない場合は [`ResolveError::Io`]、
    /// 内容が不正な場合は [`ResolveError::CredentialFormat`]
    async fn load(&self, path: &Path) -> Result<Self::Credential, ResolveError>;
}
