//! Common utilities shared across the admin panel crates.
//!
//! This crate provides:
//! - Unified error handling for validation, remote calls and prompts
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
