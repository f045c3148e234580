//! # Configuration Module
//!
//! This module provides configuration structures for mosaic rendering.

#[allow(clippy::module_inception)]
pub mod config;

pub use config::MosaicConfig;
