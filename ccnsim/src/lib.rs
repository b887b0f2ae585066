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

//! # ccnsim
//!
//! A discrete-event simulator for a Content-Centric Networking (CCN) overlay: a static graph of
//! clients, routers, and servers across which named content flows as request and data packets
//! under a simulated clock.
//!
//! The [`network::Network`] owns the topology and every node's state. Build one with
//! [`Network::add_client`]/[`Network::add_forwarder`] and [`Network::add_neighbors`], call
//! [`Network::init_routing_broadcast`] once the topology is complete, then drive it with a
//! [`scheduler::Scheduler`]:
//!
//! ```
//! use ccnsim::prelude::*;
//!
//! fn main() -> Result<(), SimError> {
//!     let mut net = Network::new();
//!     let client = net.add_client("c-0", vec!["data/0".into(), "data/0".into()], 5);
//!     let r0 = net.add_forwarder("r-0", Default::default(), 4, false);
//!     let r1 = net.add_forwarder("r-1", [("data/0".to_string(), 1)].into_iter().collect(), 4, false);
//!
//!     net.add_neighbors(client, [r0]);
//!     net.add_neighbors(r0, [client, r1]);
//!     net.add_neighbors(r1, [r0]);
//!
//!     net.init_routing_broadcast()?;
//!
//!     let mut scheduler = Scheduler::new(&mut net);
//!     scheduler.run_until(100)?;
//!
//!     assert_eq!(net.node(client).unwrap().history().received.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod fib;
pub mod history;
pub mod network;
pub mod node;
pub mod packet;
pub mod pit;
pub mod prelude;
mod routing;
pub mod scheduler;
pub mod types;

#[cfg(test)]
mod test;
