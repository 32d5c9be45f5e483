//! # Data Transfer Objects
//!
//! レイヤー間で受け渡す設定オブジェクト

pub mod warehouse_options;
