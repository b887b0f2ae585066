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

//! Command-line driver for `ccnsim`: builds a topology, runs the scheduler to a deadline, and
//! exports per-node history. The CLI surface is explicitly out of scope for the core (§6); this
//! binary is the thin `clap`-derived layer over it, the same way `chameleon`'s own root binary
//! layers a `clap` CLI over the `bgpsim`-backed simulation core it drives.

use clap::{Parser, ValueEnum};
use log::info;

use ccnsim::prelude::*;
use ccnsim_topo::TopologyBuilder;

/// The topology to build before running the simulation.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Topology {
    /// A linear chain of routers, with the authoritative server at the far end.
    Chain,
    /// A hub-and-spoke star, with the authoritative server as the hub.
    Star,
    /// A random spanning tree over the routers, with a dedicated server attached to the root.
    Random,
}

/// Run a discrete-event simulation of a Content-Centric Networking overlay.
#[derive(Debug, Parser)]
#[command(name = "ccnsim", about = "Discrete-event simulator for a CCN overlay")]
struct Cli {
    /// Topology to build.
    #[clap(long, short = 't', value_enum, default_value = "chain")]
    topology: Topology,
    /// Number of router nodes (excluding the client).
    #[clap(long, short = 'n', default_value_t = 10)]
    nodes: usize,
    /// Content cache capacity at every router. Set to 0 to approximate plain IP forwarding
    /// alongside `--simulate-ip`.
    #[clap(long, default_value_t = 20)]
    cache_size: usize,
    /// Disable PIT aggregation, approximating plain IP forwarding.
    #[clap(long)]
    simulate_ip: bool,
    /// Ticks between successive client requests.
    #[clap(long, default_value_t = 5)]
    request_delay: u64,
    /// Simulated clock deadline.
    #[clap(long, default_value_t = 200)]
    run_until: u64,
    /// Content name the client requests.
    #[clap(long, default_value = "data/0")]
    name: String,
    /// Value the authoritative server holds for `--name`.
    #[clap(long, default_value_t = 1)]
    value: i64,
    /// Number of times the client requests `--name`.
    #[clap(long, default_value_t = 4)]
    requests: usize,
    /// Directory under which `output/<sim-path>/*.csv` is written.
    #[clap(long, default_value = "output")]
    output_dir: String,
    /// Subdirectory name for this run's CSV history.
    #[clap(long, default_value = "run")]
    sim_path: String,
    /// Print a JSON summary (final FIBs and the client's received packets) to stdout.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let args = Cli::parse();
    let data: OwnedData = [(args.name.clone(), args.value)].into_iter().collect();

    let mut net = Network::new();
    let (client, server) = match args.topology {
        Topology::Chain => {
            let routers = net.build_chain(args.nodes.max(1), args.cache_size, data, args.simulate_ip);
            let entry = routers[0];
            let server = *routers.last().unwrap();
            let client = net.attach_client(
                entry,
                "c-0",
                vec![args.name.clone(); args.requests],
                args.request_delay,
            );
            (client, server)
        }
        Topology::Star => {
            let (hub, spokes) =
                net.build_star(args.nodes.saturating_sub(1), data, args.cache_size, args.simulate_ip);
            let entry = spokes.first().copied().unwrap_or(hub);
            let client = net.attach_client(
                entry,
                "c-0",
                vec![args.name.clone(); args.requests],
                args.request_delay,
            );
            (client, hub)
        }
        Topology::Random => {
            let nodes = ccnsim_topo::build_random_tree(
                &mut net,
                args.nodes.max(1),
                args.cache_size,
                args.simulate_ip,
            );
            let root = nodes[0];
            let server = net.add_forwarder("server", data, args.cache_size, args.simulate_ip);
            net.add_neighbors(root, [server]);
            net.add_neighbors(server, [root]);
            let client = net.attach_client(
                root,
                "c-0",
                vec![args.name.clone(); args.requests],
                args.request_delay,
            );
            (client, server)
        }
    };

    net.init_routing_broadcast()?;
    info!(
        "topology built: {} node(s), server = {server:?}, client = {client:?}",
        net.len()
    );

    let mut scheduler = Scheduler::new(&mut net);
    scheduler.run_until(args.run_until)?;

    ccnsim_export::export_history(&net, &args.output_dir, &args.sim_path)?;
    info!(
        "wrote history to {}/{}",
        args.output_dir.trim_end_matches('/'),
        args.sim_path
    );

    if args.json {
        let history = net.node(client).unwrap().history();
        println!("{}", serde_json::to_string_pretty(history)?);
    }

    Ok(())
}
