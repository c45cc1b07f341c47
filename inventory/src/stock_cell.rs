use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::error::InventoryError;

struct Inner {
    /// Remaining reservable units. Never negative; monotonically
    /// non-increasing in this process's lifetime (no replenishment).
    total: u64,
    /// Last value read out of `total`, valid until `cache_expiry`.
    cached_value: Option<u64>,
    cache_expiry: Option<Instant>,
}

/// The atomic counter plus its read-through cache. One per Engine process;
/// exclusively owned by an `InventoryService`.
///
/// All fields live behind a single `parking_lot::Mutex` — decrement and
/// cache refresh are two branches of the same critical section, never two
/// separate locks.
pub struct StockCell {
    inner: Mutex<Inner>,
    cache_ttl: Duration,
}

impl StockCell {
    pub fn new(initial_stock: u64, cache_ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                total: initial_stock,
                cached_value: None,
                cache_expiry: None,
            }),
            cache_ttl,
        }
    }

    /// Atomically decide whether `q` units can be reserved.
    ///
    /// `q == 0` is the caller's bug, not ours: we surface it as
    /// `InvalidQuantity` rather than decrementing by zero or panicking.
    #[instrument(skip(self), fields(qty = q))]
    pub fn try_decrement(&self, q: u64) -> Result<(bool, u64), InventoryError> {
        if q == 0 {
            return Err(InventoryError::InvalidQuantity(
                "try_decrement called with q == 0".into(),
            ));
        }

        let (accepted, remaining) = {
            let mut inner = self.inner.lock();

            if inner.total >= q {
                inner.total -= q;
                // Invalidate: next snapshot() must see the fresh total, not
                // a stale cached read from before this decrement.
                inner.cached_value = None;
                inner.cache_expiry = None;
                (true, inner.total)
            } else {
                (false, inner.total)
            }
        };

        if accepted {
            debug!(remaining, "reservation accepted");
        } else {
            debug!(remaining, requested = q, "reservation rejected: insufficient inventory");
        }

        Ok((accepted, remaining))
    }

    /// A possibly-stale reading of `total`, bounded by `cache_ttl`.
    ///
    /// The common case — a still-valid cache entry — only ever reads two
    /// fields under an uncontended lock; it never touches `total` itself
    /// and never does the compare-and-subtract that `try_decrement` does.
    pub fn snapshot(&self) -> u64 {
        let mut inner = self.inner.lock();

        if let (Some(value), Some(expiry)) = (inner.cached_value, inner.cache_expiry) {
            if Instant::now() < expiry {
                return value;
            }
        }

        let value = inner.total;
        inner.cached_value = Some(value);
        inner.cache_expiry = Some(Instant::now() + self.cache_ttl);
        value
    }
}
