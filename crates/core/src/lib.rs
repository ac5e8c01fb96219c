//! Core types and shared functionality for mantine-docs.
//!
//! This crate provides:
//! - Two-tier (memory + file) cache with TTL and version invalidation
//! - Component documentation records
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod docs;
pub mod error;

pub use cache::{CacheConfig, CacheEntry, CacheStore, StorageMode};
pub use config::{AppConfig, ConfigError, ConfigProvider};
pub use docs::{ComponentDoc, ExampleEntry, PropEntry};
pub use error::Error;
