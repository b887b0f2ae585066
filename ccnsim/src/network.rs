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

//! # Top-level Network module
//!
//! [`Network`] owns the topology graph and every node's state for the simulation's lifetime. It is
//! the "external collaborator" surface of §6 (topology construction: `add_client`/`add_forwarder`
//! replace the `Node(...)` constructor overloaded on role, `add_neighbors` and
//! `init_routing_broadcast` keep their names directly) as well as the owner the scheduler drives
//! one tick at a time.
//!
//! Nodes never hold references to each other — neighbor edges are non-owning graph edges on
//! [`Network::graph`], matching the systems-language re-architecture the design notes recommend in
//! place of the prototype's `neighbors: Dict[str, NetworkNode]`.

use std::collections::HashMap;

use itertools::Itertools;
use log::trace;

use crate::{
    error::SimError,
    node::Node,
    packet::Packet,
    routing,
    types::{Name, NodeId, OwnedData, Topology},
};

/// The network topology and every node's runtime state.
#[derive(Debug, Default)]
pub struct Network {
    graph: Topology,
    nodes: HashMap<NodeId, Node>,
}

impl Network {
    /// Construct an empty network.
    pub fn new() -> Self {
        Network {
            graph: Topology::default(),
            nodes: HashMap::new(),
        }
    }

    /// Add a client node with the given request schedule and delay between requests.
    pub fn add_client(
        &mut self,
        name: impl Into<String>,
        schedule: Vec<Name>,
        request_delay: u64,
    ) -> NodeId {
        let id = self.graph.add_node(());
        self.nodes
            .insert(id, Node::new_client(id, name, schedule, request_delay));
        id
    }

    /// Add a router or server node. Pass an empty `data` map for a plain router, a non-empty one
    /// for a server. `cache_size == 0` models IP-simulation-mode (no caching anywhere).
    pub fn add_forwarder(
        &mut self,
        name: impl Into<String>,
        data: OwnedData,
        cache_size: usize,
        simulate_ip: bool,
    ) -> NodeId {
        let id = self.graph.add_node(());
        self.nodes
            .insert(id, Node::new_forwarder(id, name, data, cache_size, simulate_ip));
        id
    }

    /// Attach `peers` as neighbors of `id`. Idempotent: attaching an already-known peer again adds
    /// no second edge.
    pub fn add_neighbors(&mut self, id: NodeId, peers: impl IntoIterator<Item = NodeId>) {
        for peer in peers {
            if self.graph.find_edge(id, peer).is_none() {
                self.graph.add_edge(id, peer, ());
            }
        }
    }

    /// Populate every node's FIB by flooding name advertisements from every authoritative holder.
    /// Must be called after the full topology (every `add_neighbors` call) is in place.
    pub fn init_routing_broadcast(&mut self) -> Result<(), SimError> {
        routing::init_routing_broadcast(&self.graph, &mut self.nodes)
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Every node id in the topology, in a stable order, for exporters that enumerate per-node
    /// history (§6).
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied().sorted_by_key(|id| id.index())
    }

    /// Number of nodes in the topology.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the topology has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Neighbor ids of `id`, in an order stable for the lifetime of the topology.
    pub(crate) fn neighbors_of(&self, id: NodeId) -> Vec<NodeId> {
        self.graph.neighbors(id).collect()
    }

    /// Advance the simulation by exactly one tick: every node gets its one opportunity to act
    /// (§4.5/§5), in a stable per-run order; packets a node emits this tick become visible to
    /// their destination only once every node has acted, so they are never processed before the
    /// next tick.
    pub(crate) fn step_tick(&mut self, now: u64) -> Result<(), SimError> {
        let order = self.nodes.keys().copied().sorted_by_key(|id| id.index());

        let mut pending: Vec<(NodeId, Packet)> = Vec::new();
        for id in order {
            let neighbors = self.neighbors_of(id);
            let node = self
                .nodes
                .get_mut(&id)
                .expect("id was just drawn from self.nodes");
            let outgoing = node.step(now, &neighbors)?;
            pending.extend(outgoing);
        }

        for (target, packet) in pending {
            let node = self
                .nodes
                .get_mut(&target)
                .expect("forwarding only ever targets ids resolved from the topology graph");
            trace!("tick {now}: delivering {packet} to {target:?}");
            if node.is_client() {
                node.record_inbound(now, packet);
            } else {
                node.enqueue(packet);
            }
        }

        Ok(())
    }
}
