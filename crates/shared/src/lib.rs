//! Shared errors and configuration for DebtPath.
//!
//! This crate provides common pieces used across the other crates:
//! - Application-wide error types with HTTP status mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
