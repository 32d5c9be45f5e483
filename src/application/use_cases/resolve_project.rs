//! # Resolve Project Use Case
//!
//! プロジェクトID解決ユースケース

use std::sync::Arc;

use log::debug;

use crate::domain::entities::project_id::{ProjectId, ProjectResolution};
use crate::domain::errors::ResolveError;
use crate::domain::repositories::project_detector::ProjectDetector;
use crate::domain::services::project_resolution::ProjectResolutionService;

/// プロジェクトID解決ユースケース
///
/// 明示値があればそれを使い、無ければ環境から検出する
pub struct ResolveProjectUseCase<D: ProjectDetector> {
    detector: Arc<D>,
}

impl<D: ProjectDetector> ResolveProjectUseCase<D> {
    /// 新しいユースケースを作成
    pub fn new(detector: Arc<D>) -> Self {
        Self { detector }
    }

    /// 解決結果をタグ付きで返す
    ///
    /// 明示値がある場合、検出処理は呼ばれない
    pub async fn resolve(&self, project: Option<&str>) -> ProjectResolution {
        if let Some(id) = ProjectResolutionService::explicit(project) {
            return ProjectResolution::Resolved(id);
        }

        debug!("No explicit project id, falling back to environment detection");
        let detected = self.detector.default_project_id().await;
        ProjectResolutionService::from_ambient(detected)
    }

    /// プロジェクトIDを解決する
    ///
    /// # Errors
    ///
    /// 明示値も環境のデフォルトも無い場合に [`ResolveError::UnresolvedProject`]
    pub async fn execute(&self, project: Option<&str>) -> Result<ProjectId, ResolveError> {
        self.resolve(project).await.into_result()
    }
}
