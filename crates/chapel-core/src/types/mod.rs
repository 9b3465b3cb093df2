//! Core type definitions used across the Chapel workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
