//! # Kernel
//!
//! Shared runtime plumbing for the site: configuration types and the layered loader.

pub mod config;
mod error;

pub use crate::error::{ConfigError, ConfigErrorExt};
