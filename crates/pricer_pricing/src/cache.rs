//! Optional memoization layer over any [`OptionPricer`].
//!
//! Solvers stay pure; callers that reprice the same inputs repeatedly can
//! wrap one in a [`PriceCache`]. Keys are the exact bit patterns of the five
//! parameters plus the option side, so only identical inputs hit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionSide, PricingError, PricingModel};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    side: OptionSide,
    bits: [u64; 5],
}

impl CacheKey {
    fn new(params: &OptionParameters, side: OptionSide) -> Self {
        Self {
            side,
            bits: [
                params.spot().to_bits(),
                params.strike().to_bits(),
                params.expiry().to_bits(),
                params.rate().to_bits(),
                params.volatility().to_bits(),
            ],
        }
    }
}

/// Hit and miss counters of a [`PriceCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that called the wrapped solver
    pub misses: usize,
}

/// Thread-safe price cache wrapping a solver.
///
/// Only successful prices are stored; errors are returned to the caller and
/// the next call retries the solver. The map lock is not held while the
/// solver runs, so two threads racing on the same new key may both compute
/// it; the values are identical because the solvers are deterministic.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionSide};
/// use pricer_models::analytical::ClosedFormSolver;
/// use pricer_pricing::cache::PriceCache;
///
/// let cache = PriceCache::new(ClosedFormSolver);
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let first = cache.price(&params, OptionSide::Call).unwrap();
/// let second = cache.price(&params, OptionSide::Call).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct PriceCache<P: OptionPricer> {
    inner: P,
    entries: Mutex<HashMap<CacheKey, f64>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<P: OptionPricer> PriceCache<P> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// The wrapped solver.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached prices.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every cached price and resets the counters.
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current hit and miss counts.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    // A panic while holding the lock cannot leave a half-written f64 behind
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, f64>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: OptionPricer> OptionPricer for PriceCache<P> {
    fn model(&self) -> PricingModel {
        self.inner.model()
    }

    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
        let key = CacheKey::new(params, side);

        if let Some(&price) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(model = %self.model(), "price cache hit");
            return Ok(price);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let price = self.inner.price(params, side)?;
        self.lock().insert(key, price);
        Ok(price)
    }
}
