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

//! Pending Interest Table: the per-node aggregation and fan-out record.

use std::collections::{HashMap, HashSet};

use crate::types::{Name, NodeId};

/// Per-node map from an outstanding request name to the set of upstream neighbors waiting on a
/// response.
#[derive(Debug, Clone, Default)]
pub struct Pit(HashMap<Name, HashSet<NodeId>>);

impl Pit {
    /// Construct an empty PIT.
    pub fn new() -> Self {
        Pit(HashMap::new())
    }

    /// Record that `from` is awaiting a response for `name`. Returns `true` if `name` already had
    /// an entry (i.e. this request aggregates with one already in flight).
    pub fn insert(&mut self, name: &str, from: NodeId) -> bool {
        match self.0.get_mut(name) {
            Some(waiting) => {
                waiting.insert(from);
                true
            }
            None => {
                let mut waiting = HashSet::new();
                waiting.insert(from);
                self.0.insert(name.to_string(), waiting);
                false
            }
        }
    }

    /// Remove and return the set of neighbors waiting on `name`, if any.
    pub fn take(&mut self, name: &str) -> Option<HashSet<NodeId>> {
        self.0.remove(name)
    }

    /// Whether `name` has an outstanding entry.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of names with an outstanding entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the PIT has no outstanding entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
