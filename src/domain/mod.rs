//! # Domain Layer
//!
//! プロジェクトID解決の核心的なルールと値を定義します。
//!
//! ## 特徴
//!
//! - GCP SDKに依存しない
//! - ファイルやメタデータサーバーについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: バリューオブジェクト（ProjectId, ProjectResolution）
//! - **errors**: エラー分類（ResolveError）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（フォールバック規則）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
