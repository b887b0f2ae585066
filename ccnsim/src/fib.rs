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

//! Forwarding Information Base: name to best known next-hop neighbor and distance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Name, NodeId};

/// A single FIB entry: the neighbor to forward towards, and the hop distance recorded by the
/// routing broadcast that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibEntry {
    /// Neighbor on the shortest path towards an authoritative holder of the name.
    pub next_hop: NodeId,
    /// Hop distance recorded for this entry.
    pub distance: u32,
}

/// Per-node Forwarding Information Base, populated before simulation by the routing broadcast and
/// read-only during the scheduler phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fib(HashMap<Name, FibEntry>);

impl Fib {
    /// Construct an empty FIB.
    pub fn new() -> Self {
        Fib(HashMap::new())
    }

    /// Look up the entry for `name`.
    pub fn get(&self, name: &str) -> Option<FibEntry> {
        self.0.get(name).copied()
    }

    /// Record `entry` for `name` if no entry exists yet, or if `entry` is strictly closer than
    /// the one on file. Returns whether the FIB changed.
    pub fn update(&mut self, name: &str, entry: FibEntry) -> bool {
        match self.0.get(name) {
            Some(existing) if existing.distance <= entry.distance => false,
            _ => {
                self.0.insert(name.to_string(), entry);
                true
            }
        }
    }

    /// Iterate over all `(name, entry)` pairs currently recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &FibEntry)> {
        self.0.iter()
    }

    /// Number of names with a recorded entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the FIB has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
