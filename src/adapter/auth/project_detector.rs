//! Ambient Project Detection
//!
//! 環境変数とSDKの検出機構で実行環境のデフォルトプロジェクトIDを取得

use async_trait::async_trait;
use google_cloud_bigquery::client::google_cloud_auth::project::project;
use log::debug;

use crate::domain::repositories::project_detector::ProjectDetector;

/// プロジェクトIDを指定する環境変数（先頭から順に参照）
///
/// `GCLOUD_PROJECT` は旧名
pub const PROJECT_ENV_VARS: [&str; 2] = ["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"];

/// 環境変数からプロジェクトIDを探す
///
/// 空文字列の値は未設定として扱う
pub fn project_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    PROJECT_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

/// 実行環境のプロジェクトID検出器
///
/// 1. 環境変数（[`PROJECT_ENV_VARS`]）
/// 2. SDKの検出（`GOOGLE_APPLICATION_CREDENTIALS`、gcloudのADCファイル、メタデータサーバー）
pub struct EnvironmentProjectDetector;

impl EnvironmentProjectDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvironmentProjectDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectDetector for EnvironmentProjectDetector {
    async fn default_project_id(&self) -> Option<String> {
        if let Some(id) = project_from_env(|name| std::env::var(name).ok()) {
            debug!("Using project id from environment variable");
            return Some(id);
        }

        match project().await {
            Ok(detected) => detected
                .project_id()
                .map(|id| id.to_string())
                .filter(|id| !id.is_empty()),
            Err(e) => {
                debug!("No default project detected from the environment: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_project_from_env_primary() {
        let lookup = lookup_from(&[("GOOGLE_CLOUD_PROJECT", "env-proj")]);
        assert_eq!(project_from_env(lookup).as_deref(), Some("env-proj"));
    }

    #[test]
    fn test_project_from_env_legacy() {
        let lookup = lookup_from(&[("GCLOUD_PROJECT", "legacy-proj")]);
        assert_eq!(project_from_env(lookup).as_deref(), Some("legacy-proj"));
    }

    #[test]
    fn test_project_from_env_primary_wins() {
        let lookup = lookup_from(&[
            ("GOOGLE_CLOUD_PROJECT", "env-proj"),
            ("GCLOUD_PROJECT", "legacy-proj"),
        ]);
        assert_eq!(project_from_env(lookup).as_deref(), Some("env-proj"));
    }

    #[test]
    fn test_project_from_env_empty_is_absent() {
        let lookup = lookup_from(&[("GOOGLE_CLOUD_PROJECT", ""), ("GCLOUD_PROJECT", "legacy-proj")]);
        assert_eq!(project_from_env(lookup).as_deref(), Some("legacy-proj"));

        let lookup = lookup_from(&[("GOOGLE_CLOUD_PROJECT", "")]);
        assert!(project_from_env(lookup).is_none());
    }

    #[test]
    fn test_project_from_env_unset() {
        assert!(project_from_env(lookup_from(&[])).is_none());
    }
}
