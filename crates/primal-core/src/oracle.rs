//! # Primality Oracle
//!
//! Trial-division primality with a bounded, least-recently-used memo cache.
//!
//! The cache is the only mutable state in the CORE. It is owned by the
//! oracle instance (no process-wide memo) and guarded by a mutex, so a
//! single oracle may be shared across threads behind an `Arc`.

use crate::primitives::{BASE_PRIMES, DEFAULT_CACHE_CAPACITY};
use crate::types::CacheStats;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

// =============================================================================
// LRU MEMO
// =============================================================================

/// Bounded memo keyed by candidate.
///
/// Recency is tracked with a monotonically increasing tick; the entry with
/// the smallest tick is evicted first.
#[derive(Debug, Default)]
struct LruMemo {
    capacity: usize,
    tick: u64,
    entries: BTreeMap<u64, (bool, u64)>,
    recency: BTreeMap<u64, u64>,
    hits: u64,
    misses: u64,
}

impl LruMemo {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick = self.tick.wrapping_add(1);
        self.tick
    }

    fn get(&mut self, n: u64) -> Option<bool> {
        let tick = self.next_tick();
        match self.entries.get_mut(&n) {
            Some((value, last_used)) => {
                self.recency.remove(last_used);
                *last_used = tick;
                self.recency.insert(tick, n);
                self.hits = self.hits.saturating_add(1);
                Some(*value)
            }
            None => {
                self.misses = self.misses.saturating_add(1);
                None
            }
        }
    }

    fn put(&mut self, n: u64, value: bool) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.next_tick();
        if let Some((_, last_used)) = self.entries.insert(n, (value, tick)) {
            self.recency.remove(&last_used);
        }
        self.recency.insert(tick, n);

        while self.entries.len() > self.capacity {
            match self.recency.pop_first() {
                Some((_, oldest)) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.hits = 0;
        self.misses = 0;
    }

    fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }
}

// =============================================================================
// ORACLE
// =============================================================================

/// Decides primality and memoizes results.
#[derive(Debug)]
pub struct PrimalityOracle {
    memo: Mutex<LruMemo>,
}

impl Default for PrimalityOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimalityOracle {
    /// Create an oracle with the default cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create an oracle whose cache holds at most `capacity` entries.
    ///
    /// A capacity of zero disables memoization.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memo: Mutex::new(LruMemo::new(capacity)),
        }
    }

    fn memo(&self) -> MutexGuard<'_, LruMemo> {
        // The memo holds derived booleans only, so a poisoned lock is still usable.
        self.memo.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether `n` is prime.
    pub fn is_prime(&self, n: u64) -> bool {
        if let Some(cached) = self.memo().get(n) {
            return cached;
        }
        let result = trial_division(n);
        self.memo().put(n, result);
        result
    }

    /// Whether `n` currently has a memoized answer.
    #[must_use]
    pub fn is_cached(&self, n: u64) -> bool {
        self.memo().contains(n)
    }

    /// Snapshot of cache size and hit counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let memo = self.memo();
        CacheStats {
            hits: memo.hits,
            misses: memo.misses,
            len: memo.entries.len(),
            capacity: memo.capacity,
        }
    }

    /// Drop every memoized answer and reset the counters.
    pub fn clear_cache(&self) {
        self.memo().clear();
    }
}

/// Uncached primality test.
///
/// Rejects `n < 2` and even `n > 2`, tries the base primes while they stay
/// within `isqrt(n)`, then finishes with odd trial division up to
/// `isqrt(n)` inclusive.
#[must_use]
pub fn trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let root = n.isqrt();

    for &p in &BASE_PRIMES {
        if p > root {
            break;
        }
        if n % p == 0 {
            return n == p;
        }
    }

    let mut divisor = 3;
    while divisor <= root {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

// =============================================================================
// TESTS
// =============================================================================
