//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveProjectUseCase**: プロジェクトIDの解決
//! - **BuildClientOptionsUseCase**: クライアント設定の組み立て

pub mod build_client_options;
pub mod resolve_project;
