//! # Project Resolution Service
//!
//! プロジェクトIDのフォールバック規則

use crate::domain::entities::project_id::{ProjectId, ProjectResolution};

/// プロジェクトID解決サービス
///
/// 明示値 → 環境のデフォルト → 未解決 の順で決める
pub struct ProjectResolutionService;

impl ProjectResolutionService {
    /// 明示的に指定されたプロジェクトIDを取り出す
    ///
    /// `None` と空文字列はどちらも「指定なし」として扱う
    pub fn explicit(project: Option<&str>) -> Option<ProjectId> {
        project.and_then(ProjectId::new)
    }

    /// 環境から検出した値で解決する
    ///
    /// 検出結果が空文字列の場合も未解決
    pub fn from_ambient(detected: Option<String>) -> ProjectResolution {
        ProjectResolution::from(detected.and_then(ProjectId::new))
    }
}
