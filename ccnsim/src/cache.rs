// ccnsim: a discrete-event simulator for content-centric networking overlays
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Bounded, recency-ordered content cache (the per-node Content Store).

use std::collections::{HashMap, VecDeque};

use crate::types::{ContentValue, Name};

/// LRU cache from content name to value, with a strict capacity.
///
/// A `limit` of zero permanently disables caching: every `add` is a no-op and every `lookup`
/// misses. This is how IP-simulation-mode routers are modeled: they carry a `ContentCache::new(0)`
/// rather than a separate code path.
#[derive(Debug, Clone)]
pub struct ContentCache {
    limit: usize,
    // Front = least recently used, back = most recently used.
    order: VecDeque<Name>,
    entries: HashMap<Name, ContentValue>,
}

impl ContentCache {
    /// Create an empty cache with the given capacity.
    pub fn new(limit: usize) -> Self {
        ContentCache {
            limit,
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }

    /// Capacity of this cache.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or reseat `key` as the most-recently-used entry, evicting the least-recently-used
    /// entry first if the cache is at capacity. No-op when `limit == 0`.
    pub fn add(&mut self, key: &str, value: ContentValue) {
        if self.limit == 0 {
            return;
        }
        if self.entries.contains_key(key) {
            self.remove_from_order(key);
        } else if self.entries.len() >= self.limit {
            self.evict();
        }
        self.order.push_back(key.to_string());
        self.entries.insert(key.to_string(), value);
    }

    /// Look up `key`. A hit reseats the entry as most-recently-used.
    pub fn lookup(&mut self, key: &str) -> Option<ContentValue> {
        let value = *self.entries.get(key)?;
        self.add(key, value);
        Some(value)
    }

    /// Look up `key` without disturbing recency order. Useful for diagnostics and exporters that
    /// want to inspect cache contents after a run without the reseat side effect of [`Self::lookup`].
    pub fn peek(&self, key: &str) -> Option<ContentValue> {
        self.entries.get(key).copied()
    }

    /// Evict the least-recently-used entry. No-op on an empty cache.
    pub fn evict(&mut self) {
        if let Some(key) = self.order.pop_front() {
            self.entries.remove(&key);
        }
    }

    /// Remove every entry.
    pub fn flush(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    fn remove_from_order(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }
}
