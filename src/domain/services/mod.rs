//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod project_resolution;
