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

//! Module containing shared type definitions.

use std::collections::HashMap;

/// Index type backing [`NodeId`]. `u32` bounds topologies to four billion nodes, which is far
/// beyond anything the simulator is meant to scale to.
pub(crate) type IndexType = u32;

/// Stable identifier of a node, and its index into the topology graph.
pub type NodeId = petgraph::graph::NodeIndex<IndexType>;

/// Undirected topology graph: nodes carry no payload (that lives in [`crate::node::Node`]), edges
/// carry no weight since routing distance is plain hop count.
pub(crate) type Topology = petgraph::graph::UnGraph<(), (), IndexType>;

/// Content name, e.g. `"data/0"`.
pub type Name = String;

/// Value stored for a content name, both in a node's owned data and in its cache.
pub type ContentValue = i64;

/// Authoritative content owned by a server-role node: name to value.
pub type OwnedData = HashMap<Name, ContentValue>;
