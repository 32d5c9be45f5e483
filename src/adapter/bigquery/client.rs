//! BigQuery Client Construction
//!
//! 解決済みのクライアント設定を SDK の `ClientConfig` / `Client` に確定する

use anyhow::{Context, Result};
use google_cloud_bigquery::client::{Client, ClientConfig};
use log::info;

use crate::adapter::auth::ServiceCredential;
use crate::application::dto::warehouse_options::WarehouseClientOptions;
use crate::domain::entities::project_id::ProjectId;

/// BigQuery用のクライアント設定ビルダー
pub type BigQueryClientOptions = WarehouseClientOptions<ServiceCredential>;

impl WarehouseClientOptions<ServiceCredential> {
    /// SDKの `ClientConfig` に確定する
    ///
    /// 認証情報があればそのサービスアカウントで、無ければ環境のデフォルト認証（ADC）で
    /// トークンソースを作る。SDKが返すプロジェクトIDは使わず、解決済みの値を返す
    pub async fn into_client_config(self) -> Result<(ClientConfig, ProjectId)> {
        let debug = self.debug();
        let (project_id, credential) = self.into_parts();

        let (config, _sdk_project_id) = match credential {
            Some(credential) => {
                ClientConfig::new_with_credentials(credential.into_credentials_file())
                    .await
                    .context("Failed to authenticate with service account")?
            }
            None => ClientConfig::new_with_auth()
                .await
                .context("Failed to authenticate with application default credentials")?,
        };

        Ok((config.with_debug(debug), project_id))
    }

    /// BigQuery クライアントを作成する
    pub async fn connect(self) -> Result<(Client, ProjectId)> {
        let (config, project_id) = self.into_client_config().await?;

        let client = Client::new(config)
            .await
            .context("Failed to create BigQuery client")?;

        info!("Created BigQuery client for project {}", project_id);
        Ok((client, project_id))
    }
}
