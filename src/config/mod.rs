//! Configuration module for repair-quote
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::QuotePaths;
pub use settings::{DependentFieldPolicy, Settings};
