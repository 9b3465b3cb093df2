//! # chapel-core
//!
//! Core crate for Chapel. Contains configuration schemas, the unified
//! error system, pagination types, and the cache provider trait.
//!
//! This crate has **no** internal dependencies on other Chapel crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
