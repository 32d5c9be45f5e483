//! # Build Client Options Use Case
//!
//! データウェアハウスクライアント設定の組み立てユースケース

use std::path::Path;
use std::sync::Arc;

use crate::application::dto::warehouse_options::WarehouseClientOptions;
use crate::application::use_cases::resolve_project::ResolveProjectUseCase;
use crate::domain::errors::ResolveError;
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::domain::repositories::project_detector::ProjectDetector;

/// クライアント設定組み立てユースケース
///
/// 認証情報ファイルの読み込みとプロジェクトIDの解決をまとめて行う
pub struct BuildClientOptionsUseCase<D: ProjectDetector, R: CredentialRepository> {
    resolve_project: ResolveProjectUseCase<D>,
    credential_repository: Arc<R>,
}

impl<D: ProjectDetector, R: CredentialRepository> BuildClientOptionsUseCase<D, R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `detector` - 環境のプロジェクトID検出
    /// * `credential_repository` - 認証情報リポジトリ
    pub fn new(detector: Arc<D>, credential_repository: Arc<R>) -> Self {
        Self {
            resolve_project: ResolveProjectUseCase::new(detector),
            credential_repository,
        }
    }

    /// クライアント設定を組み立てる
    ///
    /// # Arguments
    ///
    /// * `project_id` - 明示的なプロジェクトID（`None` または空なら環境から検出）
    /// * `credential_path` - 認証情報ファイルのパス（`None` なら環境のデフォルト認証）
    ///
    /// # Errors
    ///
    /// 認証情報の読み込みエラーはそのまま返す（プロジェクトIDより先に評価される）。
    /// プロジェクトIDが解決できない場合は [`ResolveError::UnresolvedProject`]
    pub async fn execute(
        &self,
        project_id: Option<&str>,
        credential_path: Option<&Path>,
    ) -> Result<WarehouseClientOptions<R::Credential>, ResolveError> {
        let credential = match credential_path {
            Some(path) => Some(self.credential_repository.load(path).await?),
            None => None,
        };

        let project_id = self.resolve_project.execute(project_id).await?;

        let mut options = WarehouseClientOptions::new(project_id);
        if let Some(credential) = credential {
            options.set_credential(credential);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::domain::errors::UNRESOLVED_PROJECT_MESSAGE;
    use crate::domain::repositories::credential_repository::MockCredentialRepository;
    use crate::domain::repositories::project_detector::MockProjectDetector;

    fn detector_returning(value: Option<&'static str>) -> Arc<MockProjectDetector> {
        let mut mock = MockProjectDetector::new();
        mock.expect_default_project_id()
            .returning(move || value.map(str::to_string));
        Arc::new(mock)
    }

    fn unused_repository() -> Arc<MockCredentialRepository> {
        let mut mock = MockCredentialRepository::new();
        mock.expect_load().times(0);
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_no_inputs_no_ambient_project() {
        let use_case = BuildClientOptionsUseCase::new(detector_returning(None), unused_repository());

        let err = use_case.execute(None, None).await.unwrap_err();

        assert!(matches!(err, ResolveError::UnresolvedProject));
        assert_eq!(err.to_string(), UNRESOLVED_PROJECT_MESSAGE);
    }

    #[tokio::test]
    async fn test_no_inputs_with_ambient_project() {
        let use_case = BuildClientOptionsUseCase::new(
            detector_returning(Some("env-proj")),
            unused_repository(),
        );

        let options = use_case.execute(None, None).await.unwrap();

        assert_eq!(options.project_id().as_str(), "env-proj");
        assert!(!options.has_credential());
    }

    #[tokio::test]
    async fn test_explicit_project_and_credential() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_load()
            .withf(|path| path.to_path_buf() == PathBuf::from("/keys/sa.json"))
            .times(1)
            .returning(|_| Ok("sa-credential".to_string()));

        let mut detector = MockProjectDetector::new();
        detector.expect_default_project_id().times(0);

        let use_case = BuildClientOptionsUseCase::new(Arc::new(detector), Arc::new(repo));
        let options = use_case
            .execute(Some("proj-x"), Some(Path::new("/keys/sa.json")))
            .await
            .unwrap();

        assert_eq!(options.project_id().as_str(), "proj-x");
        assert_eq!(options.credential().map(String::as_str), Some("sa-credential"));
    }

    #[tokio::test]
    async fn test_empty_project_falls_back_to_ambient() {
        let use_case = BuildClientOptionsUseCase::new(
            detector_returning(Some("env-proj")),
            unused_repository(),
        );

        let options = use_case.execute(Some(""), None).await.unwrap();

        assert_eq!(options.project_id().as_str(), "env-proj");
    }

    #[tokio::test]
    async fn test_credential_error_propagates_before_project_resolution() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_load().returning(|path| {
            Err(ResolveError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
            })
        });

        let mut detector = MockProjectDetector::new();
        detector.expect_default_project_id().times(0);

        let use_case = BuildClientOptionsUseCase::new(Arc::new(detector), Arc::new(repo));
        let err = use_case
            .execute(None, Some(Path::new("/missing/key.json")))
            .await
            .unwrap_err();

        match err {
            ResolveError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/missing/key.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_format_error_propagates() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_load().returning(|path| {
            Err(ResolveError::CredentialFormat {
                path: path.to_path_buf(),
                source: "not a service account".into(),
            })
        });

        let use_case = BuildClientOptionsUseCase::new(
            detector_returning(Some("env-proj")),
            Arc::new(repo),
        );
        let err = use_case
            .execute(Some("proj-x"), Some(Path::new("/keys/garbage.json")))
            .await
            .unwrap_err();

        assert!(err.is_credential_format());
    }
}
