//! # gcp-resolver
//!
//! BigQuery クライアントを作るための GCP 認証情報とプロジェクトIDを解決するライブラリ
//!
//! クリーンアーキテクチャの4層で構成されています：
//!
//! - **Domain層**: プロジェクトIDの値とフォールバック規則（SDK非依存）
//! - **Application層**: 解決フロー（ユースケース）とクライアント設定DTO
//! - **Adapter層**: GCP SDK・ファイルシステムとの統合
//! - **Driver層**: CLI、依存性注入
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use std::path::Path;
//!
//! let options = gcp_resolver::build_warehouse_client_options(
//!     Some("my-project"),
//!     Some(Path::new("/etc/gcp/key.json")),
//! )
//! .await?;
//! let (client, project_id) = options.with_debug(true).connect().await?;
//! # let _ = (client, project_id);
//! # Ok(())
//! # }
//! ```

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use adapter::auth::{load_credentials, ServiceCredential};
pub use adapter::bigquery::BigQueryClientOptions;
pub use adapter::resolver::{build_warehouse_client_options, get_project_id};
pub use domain::entities::project_id::{ProjectId, ProjectResolution};
pub use domain::errors::{ResolveError, UNRESOLVED_PROJECT_MESSAGE};
