//! # chapel-cache
//!
//! Cache provider implementations for Chapel. The only backend is an
//! in-process [moka](https://crates.io/crates/moka) cache with per-entry
//! TTLs; it holds the attendance form link. Revoked token ids live in the
//! separate, unbounded [`RevocationList`].

pub mod keys;
pub mod memory;
pub mod provider;
pub mod revocation;

pub use provider::CacheManager;
pub use revocation::RevocationList;
