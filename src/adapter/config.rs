//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 設定ファイルのデフォルトパス
pub const DEFAULT_CONFIG_PATH: &str = "./.gcp-resolver/config.json";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Config {
    /// 明示的なプロジェクトID（無ければ環境から検出）
    #[serde(default)]
    pub project_id: Option<String>,

    /// サービスアカウントキーのパス（無ければADC）
    #[serde(default)]
    pub service_account_key_path: Option<String>,

    /// SDKのデバッグ出力
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    /// ファイルが無ければデフォルト設定を返す
    pub fn load_if_exists(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
