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

use crate::{network::Network, types::{NodeId, OwnedData}};

mod test_cache;
mod test_pit;
mod test_scenarios;

/// Build a chain of `n_routers` forwarders `r-0 .. r-{n-1}` and a client `c-0` attached to `r-0`,
/// mirroring the Python prototype's `build_simple_network` helper. `last_router_data` is the
/// authoritative content the far end of the chain (`r-{n-1}`) serves.
fn build_chain(
    net: &mut Network,
    n_routers: usize,
    cache_size: usize,
    last_router_data: OwnedData,
    schedule: Vec<String>,
    request_delay: u64,
) -> (NodeId, Vec<NodeId>) {
    assert!(n_routers >= 2, "n_routers must be at least 2");

    let mut routers = Vec::with_capacity(n_routers);
    for i in 0..n_routers - 1 {
        routers.push(net.add_forwarder(format!("r-{i}"), Default::default(), cache_size, false));
    }
    routers.push(net.add_forwarder(
        format!("r-{}", n_routers - 1),
        last_router_data,
        cache_size,
        false,
    ));

    for i in 1..n_routers - 1 {
        let prev = routers[i - 1];
        let next = routers[i + 1];
        net.add_neighbors(routers[i], [prev, next]);
    }
    net.add_neighbors(routers[n_routers - 1], [routers[n_routers - 2]]);

    let client = net.add_client("c-0", schedule, request_delay);
    net.add_neighbors(client, [routers[0]]);
    net.add_neighbors(routers[0], [client, routers[1]]);

    (client, routers)
}
