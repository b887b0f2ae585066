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

//! Immutable packet descriptor and the discipline for evolving it across hops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ContentValue, Name, NodeId};

/// Whether a [`Packet`] is an interest (request) or a data (response) packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacketKind {
    /// Names desired content.
    Request,
    /// Carries the named content's value.
    Data,
}

/// A request or data unit in flight.
///
/// `Packet` is treated as immutable once created: forwarding never mutates a packet in place, it
/// produces a new one via [`Packet::forwarded`]. This is the only safe-sharing discipline the
/// simulator assumes, and it is why packets can be freely cloned into multiple outgoing queues
/// during PIT fan-out without any synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Opaque identifier assigned at origin, preserved across every hop.
    pub uid: u64,
    /// Content name this packet concerns.
    pub search: Name,
    /// Id of the node that most recently transmitted this packet.
    pub sender_id: NodeId,
    /// Request or data.
    pub kind: PacketKind,
    /// Payload, meaningful only when `kind == PacketKind::Data`.
    pub response_data: Option<ContentValue>,
    /// Hop counter, monotonically non-decreasing across a packet's lineage.
    pub inverse_ttl: u32,
}

impl Packet {
    /// Build a fresh request packet at its point of origin (hop count zero).
    pub fn new_request(uid: u64, search: impl Into<Name>, sender_id: NodeId) -> Self {
        Packet {
            uid,
            search: search.into(),
            sender_id,
            kind: PacketKind::Request,
            response_data: None,
            inverse_ttl: 0,
        }
    }

    /// Copy this packet, overwriting the sender, optionally changing its kind and payload, and
    /// optionally incrementing the hop counter. The receiver is never mutated; `self` stays valid.
    pub fn forwarded(
        &self,
        sender_id: NodeId,
        kind: PacketKind,
        response_data: Option<ContentValue>,
        increment_hop: bool,
    ) -> Packet {
        Packet {
            uid: self.uid,
            search: self.search.clone(),
            sender_id,
            kind,
            response_data,
            inverse_ttl: if increment_hop {
                self.inverse_ttl + 1
            } else {
                self.inverse_ttl
            },
        }
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PacketKind::Request => write!(
                f,
                "request#{} {:?} from {:?} (hops={})",
                self.uid, self.search, self.sender_id, self.inverse_ttl
            ),
            PacketKind::Data => write!(
                f,
                "data#{} {:?} from {:?} (hops={}, value={:?})",
                self.uid, self.search, self.sender_id, self.inverse_ttl, self.response_data
            ),
        }
    }
}
