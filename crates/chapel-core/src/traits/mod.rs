//! Core traits defined in `chapel-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
