//! GCP Authentication
//!
//! サービスアカウント認証情報ファイルの読み込み

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;
use google_cloud_bigquery::client::google_cloud_auth::credentials::CredentialsFile;
use log::debug;

use crate::domain::errors::ResolveError;
use crate::domain::repositories::credential_repository::CredentialRepository;

/// サービスアカウントの認証情報ファイルの `type`
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// サービスアカウント認証情報
///
/// SDKの `CredentialsFile` を包むだけのハンドル。破棄処理は不要
pub struct ServiceCredential {
    file: CredentialsFile,
}

impl ServiceCredential {
    /// SDKのドキュメントをサービスアカウントとして受け入れる
    fn from_credentials_file(file: CredentialsFile) -> Result<Self, String> {
        if file.tp != SERVICE_ACCOUNT_TYPE {
            return Err(format!(
                "expected credential type \"{}\", found \"{}\"",
                SERVICE_ACCOUNT_TYPE, file.tp
            ));
        }
        if file.client_email.is_none() {
            return Err("missing field `client_email`".to_string());
        }
        if file.private_key.is_none() {
            return Err("missing field `private_key`".to_string());
        }
        Ok(Self { file })
    }

    /// サービスアカウントのメールアドレス
    pub fn client_email(&self) -> Option<&str> {
        self.file.client_email.as_deref()
    }

    /// ファイルに埋め込まれたプロジェクトID
    pub fn project_id(&self) -> Option<&str> {
        self.file.project_id.as_deref()
    }

    /// SDKの型に戻す
    pub fn into_credentials_file(self) -> CredentialsFile {
        self.file
    }
}

// 秘密鍵は出力しない
impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("client_email", &self.client_email())
            .field("project_id", &self.project_id())
            .finish_non_exhaustive()
    }
}

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// 認証情報ファイルを読み込む（同期処理）
///
/// ファイルハンドルはこの関数のスコープ内でのみ生存し、パース失敗時も閉じられる
fn read_credential_file(path: &Path) -> Result<ServiceCredential, ResolveError> {
    let file = File::open(path).map_err(|source| ResolveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: CredentialsFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                ResolveError::Io {
                    path: path.to_path_buf(),
                    source: e.into(),
                }
            } else {
                ResolveError::CredentialFormat {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                }
            }
        })?;

    ServiceCredential::from_credentials_file(parsed).map_err(|reason| {
        ResolveError::CredentialFormat {
            path: path.to_path_buf(),
            source: reason.into(),
        }
    })
}

/// サービスアカウント認証情報を読み込みます。
///
/// パスはそのまま使います（`~` の展開は行わない）。
/// 設定ファイルやCLI由来のパスは呼び出し側で [`expand_key_path`] を通してください。
///
/// # Errors
///
/// - ファイルを開けない・読めない場合は [`ResolveError::Io`]
/// - サービスアカウントのドキュメントでない場合は [`ResolveError::CredentialFormat`]
pub async fn load_credentials(path: impl AsRef<Path>) -> Result<ServiceCredential, ResolveError> {
    let path = path.as_ref().to_path_buf();
    let task_path = path.clone();

    let credential = tokio::task::spawn_blocking(move || read_credential_file(&task_path))
        .await
        .map_err(|e| ResolveError::Io {
            path,
            source: std::io::Error::other(format!("Failed to spawn blocking task: {}", e)),
        })??;

    debug!(
        "Loaded service account credential for {}",
        credential.client_email().unwrap_or("<unknown>")
    );

    Ok(credential)
}

/// ファイルベースの認証情報リポジトリ
pub struct FileCredentialRepository;

impl FileCredentialRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileCredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialRepository for FileCredentialRepository {
    type Credential = ServiceCredential;

    async fn load(&self, path: &Path) -> Result<ServiceCredential, ResolveError> {
        load_credentials(path).await
    }
}
