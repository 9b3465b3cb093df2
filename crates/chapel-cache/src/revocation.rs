//! Revoked token ids, held until the token would have expired anyway.
//!
//! Kept apart from [`CacheManager`](crate::CacheManager): that cache is
//! bounded and may evict, while a revocation must outlive every other
//! entry up to its own TTL. This list has no size bound; entries leave
//! only through expiry.

use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

/// Expires each revocation after the remaining token lifetime it was
/// recorded with.
struct RemainingLifetime;

impl Expiry<Uuid, Duration> for RemainingLifetime {
    fn expire_after_create(&self, _jti: &Uuid, ttl: &Duration, _created_at: Instant) -> Option<Duration> {
        Some(*ttl)
    }

    fn expire_after_update(
        &self,
        _jti: &Uuid,
        ttl: &Duration,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(*ttl)
    }
}

/// Unbounded set of revoked token ids with per-entry expiry.
#[derive(Debug, Clone)]
pub struct RevocationList {
    revoked: Cache<Uuid, Duration>,
}

impl RevocationList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            revoked: Cache::builder().expire_after(RemainingLifetime).build(),
        }
    }

    /// Record `jti` as revoked for `ttl`.
    pub async fn revoke(&self, jti: Uuid, ttl: Duration) {
        debug!(jti = %jti, ttl_secs = ttl.as_secs(), "revocation recorded");
        self.revoked.insert(jti, ttl).await;
    }

    /// Whether `jti` was revoked and its entry has not yet expired.
    pub async fn is_revoked(&self, jti: Uuid) -> bool {
        self.revoked.get(&jti).await.is_some()
    }

    /// Number of live revocations.
    pub async fn len(&self) -> u64 {
        self.revoked.run_pending_tasks().await;
        self.revoked.entry_count()
    }

    /// Whether no revocation is live.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for RevocationList {
    fn default() -> Self {
        Self::new()
    }
}
