//! # ProjectId Value Object
//!
//! GCPプロジェクトIDのバリューオブジェクト

use std::fmt;

use crate::domain::errors::ResolveError;

/// 解決済みのGCPプロジェクトID
///
/// 空文字列のプロジェクトIDは存在しない（生成時に弾かれる）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    /// プロジェクトIDを作成します。
    ///
    /// 空文字列の場合は `None` を返します。
    ///
    /// # 例
    ///
    /// ```
    /// use gcp_resolver::domain::entities::project_id::ProjectId;
    ///
    /// let id = ProjectId::new("my-project").unwrap();
    /// assert_eq!(id.as_str(), "my-project");
    ///
    /// assert!(ProjectId::new("").is_none());
    /// ```
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// 文字列スライスとして返す
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を移動して `String` として返す
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// プロジェクトID解決の結果
///
/// 明示値 → 環境検出 → 失敗 のフォールバックを `null` に頼らず表現する
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectResolution {
    /// 解決済み
    Resolved(ProjectId),
    /// 明示値も環境のデフォルトも無かった
    Unresolved,
}

impl ProjectResolution {
    /// 解決済みかどうか
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// `Result` に変換します。
    ///
    /// `Unresolved` は [`ResolveError::UnresolvedProject`] になります。
    pub fn into_result(self) -> Result<ProjectId, ResolveError> {
        match self {
            Self::Resolved(id) => Ok(id),
            Self::Unresolved => Err(ResolveError::UnresolvedProject),
        }
    }
}

impl From<Option<ProjectId>> for ProjectResolution {
    fn from(value: Option<ProjectId>) -> Self {
        match value {
            Some(id) => Self::Resolved(id),
            None => Self::Unresolved,
        }
    }
}
