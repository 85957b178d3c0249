use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

struct Stamped<V> {
    value: V,
    stored_at: Instant,
}

impl<V> Stamped<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }
}

/// Process-wide memoization keyed by identifier.
///
/// Without a TTL an entry is written once and served until the process
/// exits, however stale the upstream data behind it has become.
pub struct MemoStore<V> {
    name: &'static str,
    entries: DashMap<String, Stamped<V>>,
    ttl: Option<Duration>,
}

impl<V: Clone> MemoStore<V> {
    pub fn new(name: &'static str, ttl: Option<Duration>) -> Self {
        Self {
            name,
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if !self.is_expired(&entry) {
            return Some(entry.value.clone());
        }

        // Release the shard read lock before taking the write lock.
        drop(entry);
        self.entries.remove_if(key, |_, stamped| self.is_expired(stamped));
        None
    }

    /// Store `value` unless a live entry already exists. Returns whether it was stored.
    pub fn put_if_absent(&self, key: &str, value: V) -> bool {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) if self.is_expired(occupied.get()) => {
                occupied.insert(Stamped::new(value));
                true
            }
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(Stamped::new(value));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, stamped: &Stamped<V>) -> bool {
        match self.ttl {
            Some(ttl) => stamped.stored_at.elapsed() >= ttl,
            None => false,
        }
    }
}
