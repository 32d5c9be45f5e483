//! # Domain Entities
//!
//! バリューオブジェクトを定義するモジュール
//!
//! ## バリューオブジェクト
//!
//! - **ProjectId**: 空でないGCPプロジェクトID
//! - **ProjectResolution**: プロジェクトID解決の結果

pub mod project_id;
