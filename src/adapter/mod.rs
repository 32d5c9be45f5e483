//! Adapter Layer
//!
//! 外部システム（GCP SDK, ファイルシステム）との統合

pub mod auth;
pub mod bigquery;
pub mod config;
pub mod resolver;
