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

//! Routing broadcast: floods name advertisements so every node learns a shortest next-hop.
//!
//! The reference model describes this as a recursive `rebroadcast` call originating at every
//! authoritative server. That recursion is naturally equivalent to a multi-source breadth-first
//! search rooted at the set of holders of each name (every node the broadcast first reaches at
//! distance `d` is, by construction, one hop closer to a holder than the node it heard from at
//! distance `d - 1`). This module computes FIBs that way with an explicit worklist, matching the
//! BFS-equivalence the design notes call out and avoiding recursion depth proportional to
//! topology diameter.

use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;
use log::debug;

use crate::{error::SimError, fib::FibEntry, node::Node, types::{Name, NodeId, Topology}};

/// Run the routing broadcast over every advertised name in `nodes`, populating each reachable
/// node's FIB. `graph` must already have every neighbor edge attached.
pub(crate) fn init_routing_broadcast(
    graph: &Topology,
    nodes: &mut HashMap<NodeId, Node>,
) -> Result<(), SimError> {
    for (&id, _) in nodes.iter() {
        if graph.neighbors(id).next().is_none() {
            return Err(SimError::UnsetNeighbors { node: id });
        }
    }

    let mut holders_by_name: HashMap<Name, Vec<NodeId>> = HashMap::new();
    for (&id, node) in nodes.iter() {
        if let Some(data) = node.owned_data() {
            for name in data.keys() {
                holders_by_name.entry(name.clone()).or_default().push(id);
            }
        }
    }

    for (name, holders) in holders_by_name {
        let holders = holders.into_iter().sorted_by_key(|n| n.index()).collect_vec();
        debug!("routing broadcast: {:?} advertised by {} holder(s)", name, holders.len());
        multi_source_bfs(graph, &holders, &name, nodes);
    }

    Ok(())
}

/// Breadth-first search from every holder of `name` simultaneously. A node discovered as a
/// neighbor of `u` (at hop distance `du` from the nearest holder) records `FibEntry { next_hop: u,
/// distance: du }` — `u` is the correct next hop since BFS only ever discovers a node through a
/// shortest-path predecessor, and `du` is exactly the distance the reference recursive broadcast
/// would have threaded through that predecessor.
fn multi_source_bfs(graph: &Topology, holders: &[NodeId], name: &str, nodes: &mut HashMap<NodeId, Node>) {
    let mut hop_distance: HashMap<NodeId, u32> = HashMap::new();
    let mut worklist: VecDeque<NodeId> = VecDeque::new();

    for &holder in holders {
        hop_distance.insert(holder, 0);
        worklist.push_back(holder);
    }

    let mut visited: HashSet<NodeId> = hop_distance.keys().copied().collect();
    while let Some(u) = worklist.pop_front() {
        let du = hop_distance[&u];
        for v in graph.neighbors(u) {
            if visited.insert(v) {
                hop_distance.insert(v, du + 1);
                if let Some(node) = nodes.get_mut(&v) {
                    node.fib_mut().update(name, FibEntry { next_hop: u, distance: du });
                }
                worklist.push_back(v);
            }
        }
    }
}
