//! ADC Project Detection Tests
//!
//! `GOOGLE_APPLICATION_CREDENTIALS` のファイルからのプロジェクトID検出
//!
//! プロセス全体の環境変数を書き換えるため、このファイルのテストは1つだけにする

use std::path::PathBuf;

use gcp_resolver::adapter::auth::EnvironmentProjectDetector;
use gcp_resolver::domain::repositories::project_detector::ProjectDetector;

#[tokio::test]
async fn test_detects_project_from_application_credentials_file() {
    let key_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("service_account.json");

    std::env::remove_var("GOOGLE_CLOUD_PROJECT");
    std::env::remove_var("GCLOUD_PROJECT");
    std::env::set_var("GOOGLE_APPLICATION_CREDENTIALS", &key_path);

    let detected = EnvironmentProjectDetector::new().default_project_id().await;

    assert_eq!(detected.as_deref(), Some("fixture-project"));
}
