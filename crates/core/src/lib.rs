//! Core types and configuration for the volume profile engine.
//!
//! This crate provides shared types used by the engine crate:
//! - Profile result types (bins, POC, value area)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{ProfileConfig, DEFAULT_NUM_BINS, DEFAULT_VALUE_AREA_PERCENT, MIN_BARS};
pub use error::{Error, Result};
pub use types::*;
