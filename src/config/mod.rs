//! Configuration module for Wayfarer
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WayfarerPaths;
pub use settings::Settings;
