//! Authentication Module
//!
//! GCP認証関連の機能

pub mod gcp_auth;
pub mod project_detector;

pub use gcp_auth::{expand_key_path, load_credentials, FileCredentialRepository, ServiceCredential};
pub use project_detector::EnvironmentProjectDetector;
