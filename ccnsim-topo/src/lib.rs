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

#![deny(missing_debug_implementations)]

//! Scenario construction for [`ccnsim`]: chain, star, and (with the `rand` feature) random
//! topology generators.
//!
//! `ccnsim`'s core never depends on `rand` (the simulator itself is deterministic given a fixed
//! tick-order policy); this crate is the out-of-scope "topology builder" collaborator §1 of the
//! core's specification names, laid out as an extension trait over [`Network`] the way
//! `bgpsim::builder::NetworkBuilder` extends `bgpsim::network::Network`.

use ccnsim::prelude::*;

#[cfg(feature = "rand")]
use rand::{prelude::*, Rng};

/// Extension trait adding scenario-construction helpers to [`Network`].
///
/// These are conveniences over the core's own `add_client`/`add_forwarder`/`add_neighbors`; they
/// do not add any capability the core doesn't already expose.
pub trait TopologyBuilder {
    /// Build a chain of `n_routers` forwarders `r-0 .. r-{n-1}`, linking each to its immediate
    /// predecessor and successor. `server_data` is attached to the far end of the chain
    /// (`r-{n-1}`), which otherwise behaves like any other forwarder.
    ///
    /// Mirrors the Python prototype's `build_simple_network` helper (`original_source/ccn_sim/node_sim.py`).
    fn build_chain(
        &mut self,
        n_routers: usize,
        cache_size: usize,
        server_data: OwnedData,
        simulate_ip: bool,
    ) -> Vec<NodeId>;

    /// Build a star: one hub forwarder, authoritative for `hub_data`, with `n_spokes` plain
    /// forwarders attached directly to it and to nothing else.
    fn build_star(
        &mut self,
        n_spokes: usize,
        hub_data: OwnedData,
        cache_size: usize,
        simulate_ip: bool,
    ) -> (NodeId, Vec<NodeId>);

    /// Attach a new client to `to`, requesting `schedule` every `request_delay` ticks.
    fn attach_client(
        &mut self,
        to: NodeId,
        name: impl Into<String>,
        schedule: Vec<Name>,
        request_delay: u64,
    ) -> NodeId;
}

impl TopologyBuilder for Network {
    fn build_chain(
        &mut self,
        n_routers: usize,
        cache_size: usize,
        server_data: OwnedData,
        simulate_ip: bool,
    ) -> Vec<NodeId> {
        assert!(n_routers >= 1, "a chain needs at least one router");

        let mut routers = Vec::with_capacity(n_routers);
        for i in 0..n_routers.saturating_sub(1) {
            routers.push(self.add_forwarder(
                format!("r-{i}"),
                Default::default(),
                cache_size,
                simulate_ip,
            ));
        }
        routers.push(self.add_forwarder(
            format!("r-{}", n_routers - 1),
            server_data,
            cache_size,
            simulate_ip,
        ));

        for i in 1..routers.len().saturating_sub(1) {
            let prev = routers[i - 1];
            let next = routers[i + 1];
            self.add_neighbors(routers[i], [prev, next]);
        }
        if routers.len() >= 2 {
            let last = routers.len() - 1;
            self.add_neighbors(routers[last], [routers[last - 1]]);
            self.add_neighbors(routers[0], [routers[1]]);
        }

        routers
    }

    fn build_star(
        &mut self,
        n_spokes: usize,
        hub_data: OwnedData,
        cache_size: usize,
        simulate_ip: bool,
    ) -> (NodeId, Vec<NodeId>) {
        let hub = self.add_forwarder("hub", hub_data, cache_size, simulate_ip);
        let mut spokes = Vec::with_capacity(n_spokes);
        for i in 0..n_spokes {
            let spoke = self.add_forwarder(
                format!("s-{i}"),
                Default::default(),
                cache_size,
                simulate_ip,
            );
            self.add_neighbors(hub, [spoke]);
            self.add_neighbors(spoke, [hub]);
            spokes.push(spoke);
        }
        (hub, spokes)
    }

    fn attach_client(
        &mut self,
        to: NodeId,
        name: impl Into<String>,
        schedule: Vec<Name>,
        request_delay: u64,
    ) -> NodeId {
        let client = self.add_client(name, schedule, request_delay);
        self.add_neighbors(client, [to]);
        self.add_neighbors(to, [client]);
        client
    }
}

/// Build a uniformly random connected topology on `n` forwarders by growing a random spanning
/// tree one node at a time: each new node attaches to one uniformly-chosen existing node. This is
/// the `rand`-gated counterpart of `bgpsim::builder`'s random-strategy functions, kept out of the
/// core the same way the core keeps `rand` out of its own dependency tree.
#[cfg(feature = "rand")]
pub fn build_random_tree(
    net: &mut Network,
    n: usize,
    cache_size: usize,
    simulate_ip: bool,
) -> Vec<NodeId> {
    build_random_tree_seeded(net, n, cache_size, simulate_ip, &mut thread_rng())
}

/// Deterministic counterpart of [`build_random_tree`] for reproducible scenarios and tests.
#[cfg(feature = "rand")]
pub fn build_random_tree_seeded<R: Rng>(
    net: &mut Network,
    n: usize,
    cache_size: usize,
    simulate_ip: bool,
    rng: &mut R,
) -> Vec<NodeId> {
    assert!(n >= 1, "a topology needs at least one node");

    let mut nodes = Vec::with_capacity(n);
    nodes.push(net.add_forwarder("r-0", Default::default(), cache_size, simulate_ip));
    for i in 1..n {
        let parent = nodes[rng.gen_range(0..nodes.len())];
        let id = net.add_forwarder(
            format!("r-{i}"),
            Default::default(),
            cache_size,
            simulate_ip,
        );
        net.add_neighbors(parent, [id]);
        net.add_neighbors(id, [parent]);
        nodes.push(id);
    }
    nodes
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chain_links_every_router_to_its_neighbors_only() {
        let mut net = Network::new();
        let routers = net.build_chain(4, 4, Default::default(), false);
        assert_eq!(routers.len(), 4);
        net.attach_client(routers[0], "c-0", vec!["data/0".into()], 5);
        assert_eq!(net.len(), 5);
    }

    #[test]
    fn star_attaches_every_spoke_only_to_the_hub() {
        let mut net = Network::new();
        let (hub, spokes) = net.build_star(3, Default::default(), 4, false);
        assert_eq!(spokes.len(), 3);
        assert_eq!(net.len(), 4);
        assert!(spokes.iter().all(|&s| s != hub));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_tree_is_connected_and_acyclic_by_construction() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        let mut net = Network::new();
        let nodes = build_random_tree_seeded(&mut net, 20, 4, false, &mut rng);
        assert_eq!(nodes.len(), 20);
        assert_eq!(net.len(), 20);
    }
}
