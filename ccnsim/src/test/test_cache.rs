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

use crate::cache::ContentCache;

#[test]
fn round_trip_add_lookup() {
    let mut cache = ContentCache::new(4);
    cache.add("data/0", 1);
    assert_eq!(cache.lookup("data/0"), Some(1));
}

#[test]
fn add_overwrites_existing_key() {
    let mut cache = ContentCache::new(4);
    cache.add("data/0", 1);
    cache.add("data/0", 2);
    assert_eq!(cache.lookup("data/0"), Some(2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn zero_limit_cache_is_permanently_empty() {
    let mut cache = ContentCache::new(0);
    cache.add("data/0", 1);
    assert_eq!(cache.lookup("data/0"), None);
    assert_eq!(cache.len(), 0);
}

/// Scenario 4 of the simulator's testable properties: LRU eviction under a capacity-5 cache.
#[test]
fn lru_eviction_matches_reference_trace() {
    let max_cache = 5;
    let mut cache = ContentCache::new(max_cache);

    for x in 0..max_cache {
        cache.add(&format!("data/{x}"), x as i64);
    }
    for x in 0..max_cache {
        assert!(cache.lookup(&format!("data/{x}")).is_some());
    }

    // data/0 is now the least recently used; adding data/5 evicts it.
    cache.add("data/5", 5);
    assert_eq!(cache.lookup("data/0"), None);
    for x in 1..=max_cache {
        assert!(cache.lookup(&format!("data/{x}")).is_some());
    }

    // lookup moves data/1 to most-recent, so data/2 is now the LRU victim.
    cache.lookup("data/1");
    cache.add("data/6", 6);
    assert!(cache.lookup("data/1").is_some());
    assert_eq!(cache.lookup("data/2"), None);

    // add also moves an existing key to most-recent.
    cache.add("data/3", 3);
    cache.add("data/7", 7);
    assert!(cache.lookup("data/3").is_some());
    assert_eq!(cache.lookup("data/4"), None);
}

#[test]
fn capacity_invariant_holds_under_repeated_inserts() {
    let mut cache = ContentCache::new(3);
    for x in 0..20 {
        cache.add(&format!("data/{x}"), x);
        assert!(cache.len() <= cache.limit());
    }
}
