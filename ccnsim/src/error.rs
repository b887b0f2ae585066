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

//! Error types returned by the simulator core.

use thiserror::Error;

use crate::types::{Name, NodeId};

/// Fatal errors that abort a simulation run.
///
/// These all correspond to configuration mistakes or invariant violations (see the core's error
/// handling design): runtime protocol events such as cache misses, PIT aggregation, or dropping an
/// unsolicited response are normal and never raise one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A request for `name` reached `node` and no FIB entry exists for it.
    #[error("node {node:?} has no FIB entry for {name:?}")]
    MissingFibEntry { node: NodeId, name: Name },

    /// A FIB entry at `node` names `next_hop`, but `next_hop` is not a neighbor of `node`.
    #[error("node {node:?} cannot resolve next hop {next_hop:?}: not a neighbor")]
    UnresolvedNextHop { node: NodeId, next_hop: NodeId },

    /// `init_routing_broadcast` was called before `node` had any neighbors attached.
    #[error("node {node:?} has no neighbors attached; attach the topology before broadcasting routes")]
    UnsetNeighbors { node: NodeId },

    /// A response packet for `name` arrived at `node` with no payload set.
    #[error("node {node:?} received a response for {name:?} with no response data set")]
    UnsetResponseData { node: NodeId, name: Name },
}
