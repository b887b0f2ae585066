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

//! End-to-end scenarios, ported from `tests/test_node_sim.py` in the Python prototype and
//! re-expressed against the forwarder/client state machine directly.

use maplit::hashmap;
use pretty_assertions::assert_eq;

use crate::{network::Network, scheduler::Scheduler};

use super::build_chain;

/// Scenario 1: a warm second request is served straight out of the first hop's cache.
#[test]
fn two_node_chain_second_request_served_from_cache() {
    let mut net = Network::new();
    let data = hashmap! { "data/0".to_string() => 1 };
    let (client, _routers) = build_chain(
        &mut net,
        2,
        4,
        data,
        vec!["data/0".into(), "data/0".into()],
        5,
    );
    net.init_routing_broadcast().unwrap();

    Scheduler::new(&mut net).run_until(100).unwrap();

    let history = net.node(client).unwrap().history();
    assert_eq!(history.received.len(), 2);
    assert_eq!(history.received[0].inverse_ttl, 4);
    assert_eq!(history.received[1].inverse_ttl, 2);
}

/// Scenario 2: requesting the same name again before the first response lands aggregates into
/// the pending PIT entry instead of producing a second upstream request or a second response.
#[test]
fn two_node_chain_pit_aggregation_collapses_rapid_repeat() {
    let mut net = Network::new();
    let data = hashmap! { "data/0".to_string() => 1 };
    let (client, _routers) = build_chain(
        &mut net,
        2,
        4,
        data,
        vec!["data/0".into(), "data/0".into()],
        1,
    );
    net.init_routing_broadcast().unwrap();

    Scheduler::new(&mut net).run_until(100).unwrap();

    let history = net.node(client).unwrap().history();
    assert_eq!(history.requests.len(), 2);
    assert_eq!(history.received.len(), 1);
}

/// Scenario 3: a 100-node chain with the request delay spaced wide enough that the first request
/// fully resolves (cold, 200 hops) before the second fires (warm, served from `r-0`'s cache).
#[test]
fn hundred_node_chain_cold_then_cached() {
    let mut net = Network::new();
    let data = hashmap! { "data/0".to_string() => 123 };
    let (client, routers) = build_chain(
        &mut net,
        100,
        4,
        data,
        vec!["data/0".into(), "data/0".into()],
        250,
    );
    net.init_routing_broadcast().unwrap();

    Scheduler::new(&mut net).run_until(320).unwrap();

    let history = net.node(client).unwrap().history();
    assert_eq!(history.received.len(), 2);
    assert_eq!(history.received[0].inverse_ttl, 200);
    assert_eq!(history.received[1].inverse_ttl, 2);

    let r0 = net.node(routers[0]).unwrap();
    assert_eq!(r0.cache().peek("data/0"), Some(123));
    assert_eq!(r0.cache().peek("data/1"), None);
}

/// Scenario 6: with `simulate_ip` set, every request traverses the whole path to the server
/// instead of short-circuiting at a PIT aggregation. `simulate_ip` only disables the early
/// return on aggregation (node.rs's request path still forwards every duplicate); it does not
/// change the response path's fan-out, which still drains a node's entire waiting-neighbor set
/// for a name in one shot. So requests must be spaced past the round-trip time here — each
/// PIT entry clears before the next request for the same name arrives — or two in-flight
/// requests from the same client would aggregate into the same waiting-neighbor entry and
/// collapse into a single delivered response, same as the CCN-mode case.
#[test]
fn ip_simulation_mode_forwards_every_request_without_aggregation() {
    let mut net = Network::new();
    let server = net.add_forwarder("srv", hashmap! { "data/0".to_string() => 7 }, 0, true);
    let hub = net.add_forwarder("hub", Default::default(), 0, true);
    let client = net.add_client("c-0", vec!["data/0".into(); 5], 6);

    net.add_neighbors(client, [hub]);
    net.add_neighbors(hub, [client, server]);
    net.add_neighbors(server, [hub]);

    net.init_routing_broadcast().unwrap();
    Scheduler::new(&mut net).run_until(50).unwrap();

    let history = net.node(client).unwrap().history();
    assert_eq!(history.requests.len(), 5);
    assert_eq!(history.received.len(), 5);
}

/// Conservation: a client never receives more responses for a name than it requested.
#[test]
fn conservation_response_count_never_exceeds_request_count() {
    let mut net = Network::new();
    let data = hashmap! { "data/0".to_string() => 9 };
    let (client, _routers) = build_chain(&mut net, 3, 4, data, vec!["data/0".into()], 1);
    net.init_routing_broadcast().unwrap();

    Scheduler::new(&mut net).run_until(40).unwrap();

    let history = net.node(client).unwrap().history();
    assert!(history.received.len() <= history.requests.len());
}

/// A request for a name with no FIB entry anywhere is a fatal configuration error, not a
/// silently dropped packet.
#[test]
fn request_for_unadvertised_name_is_fatal() {
    let mut net = Network::new();
    let (_client, _routers) = build_chain(
        &mut net,
        2,
        4,
        Default::default(),
        vec!["data/unknown".into()],
        1,
    );
    net.init_routing_broadcast().unwrap();

    let result = Scheduler::new(&mut net).run_until(10);
    assert!(result.is_err());
}
