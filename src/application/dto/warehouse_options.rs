//! # Warehouse Client Options DTO
//!
//! データウェアハウス（BigQuery）クライアント設定のビルダー

use crate::domain::entities::project_id::ProjectId;

/// クライアント設定ビルダー
///
/// プロジェクトIDと認証情報が設定済みの状態で返され、
/// 確定（`into_client_config` など）するまでは呼び出し側で変更できる。
/// 認証情報の具体的な型はAdapter層が決める。
#[derive(Debug, Clone)]
pub struct WarehouseClientOptions<C> {
    project_id: ProjectId,
    credential: Option<C>,
    debug: bool,
}

impl<C> WarehouseClientOptions<C> {
    /// デフォルト設定でビルダーを作成します。
    ///
    /// 認証情報は未設定（環境のデフォルト認証を使う）。
    ///
    /// # 例
    ///
    /// ```
    /// use gcp_resolver::application::dto::warehouse_options::WarehouseClientOptions;
    /// use gcp_resolver::domain::entities::project_id::ProjectId;
    ///
    /// let project = ProjectId::new("env-proj").unwrap();
    /// let options: WarehouseClientOptions<String> = WarehouseClientOptions::new(project);
    ///
    /// assert_eq!(options.project_id().as_str(), "env-proj");
    /// assert!(!options.has_credential());
    /// assert!(!options.debug());
    /// ```
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            credential: None,
            debug: false,
        }
    }

    /// 認証情報を設定する
    pub fn with_credential(mut self, credential: C) -> Self {
        self.credential = Some(credential);
        self
    }

    /// デバッグ出力を設定する
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// プロジェクトIDを上書きする
    pub fn set_project_id(&mut self, project_id: ProjectId) -> &mut Self {
        self.project_id = project_id;
        self
    }

    /// 認証情報を上書きする
    pub fn set_credential(&mut self, credential: C) -> &mut Self {
        self.credential = Some(credential);
        self
    }

    /// デバッグ出力を上書きする
    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn credential(&self) -> Option<&C> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// 所有権を移動して (プロジェクトID, 認証情報) を返す
    pub fn into_parts(self) -> (ProjectId, Option<C>) {
        (self.project_id, self.credential)
    }
}
