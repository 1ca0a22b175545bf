//! Core utilities for the ESPN league history CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching of raw ESPN responses
//! - `http`: Request headers and cookie handling
//! - `logging`: Diagnostic `tracing` subscriber
//! - `outputs`: The known export files and how they are reported

pub mod cache;
pub mod http;
pub mod logging;
pub mod outputs;

// Re-export commonly used items for convenience
pub use cache::{CacheStatus, ResponseCache, SnapshotCacheKey};
pub use outputs::{existing_outputs, print_generated_files, KNOWN_OUTPUTS};
