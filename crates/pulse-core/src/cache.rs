use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default lifetime of a cached entry; one dashboard refresh cycle.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A time-bounded memoization map.
///
/// Entries are valid only within a fixed window after insertion; `get` treats
/// anything older as missing. Expired entries linger until overwritten or
/// swept with [`purge_expired`], which keeps reads cheap.
///
/// [`purge_expired`]: TtlCache::purge_expired
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> TtlCache<K, V> {
        TtlCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|(stamped, _)| stamped.elapsed() < self.ttl)
            .map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, (Instant::now(), value));
    }

    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, (stamped, _)| stamped.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> TtlCache<K, V> {
        TtlCache::new(DEFAULT_TTL)
    }
}
