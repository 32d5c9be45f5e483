//! BigQuery Adapter Modules
//!
//! BigQuery SDKとの統合

pub mod client;

pub use client::BigQueryClientOptions;
