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

//! Per-node packet-processing state machine.
//!
//! A [`Node`] owns exactly its own cache, PIT, FIB, inbound queue, and history. It never reaches
//! into a neighbor's state directly: the owning [`crate::network::Network`] resolves neighbor ids
//! to node instances and commits outgoing packets into their queues only after every node has had
//! its turn in the current tick (see [`crate::network::Network::step_tick`]).

use std::collections::VecDeque;

use log::trace;

use crate::{
    cache::ContentCache,
    error::SimError,
    fib::Fib,
    history::NodeHistory,
    pit::Pit,
    packet::{Packet, PacketKind},
    types::{Name, NodeId, OwnedData},
};

/// The role-specific configuration of a node.
///
/// This is the tagged-variant re-architecture of the role flags the original prototype carried on
/// a single node type (`is_client`, owned `data`, `simulate_ip`): a client emits on a schedule and
/// never runs the request/response state machine, while a forwarder (router or server) always
/// does. A server is simply a forwarder with non-empty owned data.
#[derive(Debug, Clone)]
pub enum NodeRole {
    /// Emits requests on a fixed cadence and logs arriving responses.
    Client {
        /// Content names to request, in order.
        schedule: Vec<Name>,
        /// Ticks to wait between successive requests.
        request_delay: u64,
        /// Index of the next name in `schedule` to request.
        cursor: usize,
        /// Tick at which the next request fires.
        next_fire: u64,
    },
    /// Processes inbound packets through the request/response state machine.
    Forwarder {
        /// Content this node serves authoritatively, if any (empty for a plain router).
        data: OwnedData,
        /// When set, disables PIT aggregation: every request is forwarded upstream regardless of
        /// whether one is already pending, approximating plain IP forwarding.
        simulate_ip: bool,
    },
}

/// A client, router, or server in the topology.
#[derive(Debug, Clone)]
pub struct Node {
    /// Stable identifier and index into the topology graph.
    pub id: NodeId,
    /// Human-readable name, used for diagnostics and history export file names.
    pub name: String,
    role: NodeRole,
    cache: ContentCache,
    pit: Pit,
    fib: Fib,
    queue: VecDeque<Packet>,
    history: NodeHistory,
    next_uid: u64,
}

impl Node {
    /// Construct a client node with the given request schedule and inter-request delay.
    pub fn new_client(id: NodeId, name: impl Into<String>, schedule: Vec<Name>, request_delay: u64) -> Self {
        Node {
            id,
            name: name.into(),
            role: NodeRole::Client {
                schedule,
                request_delay,
                cursor: 0,
                next_fire: 0,
            },
            cache: ContentCache::new(0),
            pit: Pit::new(),
            fib: Fib::new(),
            queue: VecDeque::new(),
            history: NodeHistory::new(),
            next_uid: 0,
        }
    }

    /// Construct a router or server node. `data` is empty for a plain router, or the set of names
    /// this node serves authoritatively for a server. `cache_size == 0` models IP-simulation-mode
    /// routers, which never cache.
    pub fn new_forwarder(
        id: NodeId,
        name: impl Into<String>,
        data: OwnedData,
        cache_size: usize,
        simulate_ip: bool,
    ) -> Self {
        Node {
            id,
            name: name.into(),
            role: NodeRole::Forwarder { data, simulate_ip },
            cache: ContentCache::new(cache_size),
            pit: Pit::new(),
            fib: Fib::new(),
            queue: VecDeque::new(),
            history: NodeHistory::new(),
            next_uid: 0,
        }
    }

    /// Whether this node is a client.
    pub fn is_client(&self) -> bool {
        matches!(self.role, NodeRole::Client { .. })
    }

    /// The FIB, read-only once the routing broadcast has run.
    pub fn fib(&self) -> &Fib {
        &self.fib
    }

    pub(crate) fn fib_mut(&mut self) -> &mut Fib {
        &mut self.fib
    }

    /// Content this node serves authoritatively, if it is a forwarder.
    pub fn owned_data(&self) -> Option<&OwnedData> {
        match &self.role {
            NodeRole::Forwarder { data, .. } => Some(data),
            NodeRole::Client { .. } => None,
        }
    }

    /// The cache, mostly useful for tests and diagnostics.
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// The PIT, mostly useful for tests and diagnostics.
    pub fn pit(&self) -> &Pit {
        &self.pit
    }

    /// Length of the inbound queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// This node's accumulated history.
    pub fn history(&self) -> &NodeHistory {
        &self.history
    }

    /// Push a packet onto this node's inbound FIFO. Used by the network to deliver packets
    /// produced during the previous tick; never called mid-tick on the node processing it.
    pub(crate) fn enqueue(&mut self, packet: Packet) {
        self.queue.push_back(packet);
    }

    /// Record a packet arriving at a client: clients are an arrival log, not a processing queue.
    pub(crate) fn record_inbound(&mut self, now: u64, packet: Packet) {
        self.history.responses.push((packet.search.clone(), now));
        self.history.received.push(packet);
    }

    fn next_uid(&mut self) -> u64 {
        let uid = self.next_uid;
        self.next_uid += 1;
        uid
    }

    /// Give this node its one opportunity to act this tick. Returns the packets it wants
    /// delivered to neighbors; the network commits those after every node has stepped.
    pub(crate) fn step(&mut self, now: u64, neighbors: &[NodeId]) -> Result<Vec<(NodeId, Packet)>, SimError> {
        match &self.role {
            NodeRole::Client { .. } => Ok(self.step_client(now, neighbors)),
            NodeRole::Forwarder { .. } => self.step_forwarder(now, neighbors),
        }
    }

    fn step_client(&mut self, now: u64, neighbors: &[NodeId]) -> Vec<(NodeId, Packet)> {
        let mut outgoing = Vec::new();
        let id = self.id;
        let fire = if let NodeRole::Client { schedule, cursor, next_fire, .. } = &self.role {
            (*cursor < schedule.len() && *next_fire == now).then(|| schedule[*cursor].clone())
        } else {
            None
        };
        let Some(search) = fire else {
            return outgoing;
        };

        self.history.requests.push((search.clone(), now));
        for &neighbor in neighbors {
            let uid = self.next_uid();
            outgoing.push((neighbor, Packet::new_request(uid, search.clone(), id)));
        }

        if let NodeRole::Client { cursor, next_fire, request_delay, .. } = &mut self.role {
            *cursor += 1;
            *next_fire = now + *request_delay;
        }
        outgoing
    }

    fn step_forwarder(&mut self, now: u64, neighbors: &[NodeId]) -> Result<Vec<(NodeId, Packet)>, SimError> {
        self.history.queue_len.push((now, self.queue.len()));
        match self.queue.pop_front() {
            Some(packet) => self.process_packet(packet, neighbors),
            None => Ok(Vec::new()),
        }
    }

    fn process_packet(&mut self, packet: Packet, neighbors: &[NodeId]) -> Result<Vec<(NodeId, Packet)>, SimError> {
        match packet.kind {
            PacketKind::Request => self.process_request(packet, neighbors),
            PacketKind::Data => self.process_response(packet),
        }
    }

    /// §4.4 request path: PIT insertion and aggregation, cache probe, owned-data probe, upstream
    /// forward — in that order, each step returning early on a match.
    fn process_request(&mut self, request: Packet, neighbors: &[NodeId]) -> Result<Vec<(NodeId, Packet)>, SimError> {
        let simulate_ip = match &self.role {
            NodeRole::Forwarder { simulate_ip, .. } => *simulate_ip,
            NodeRole::Client { .. } => false,
        };

        let aggregated = self.pit.insert(&request.search, request.sender_id);
        if aggregated && !simulate_ip {
            trace!("{}: aggregating request for {:?} into existing PIT entry", self.name, request.search);
            return Ok(Vec::new());
        }

        if let Some(value) = self.cache.lookup(&request.search) {
            let response = request.forwarded(self.id, PacketKind::Data, Some(value), true);
            return self.process_response(response);
        }

        let owned = self
            .owned_data()
            .and_then(|data| data.get(&request.search))
            .copied();
        if let Some(value) = owned {
            let response = request.forwarded(self.id, PacketKind::Data, Some(value), true);
            return self.process_response(response);
        }

        let entry = self
            .fib
            .get(&request.search)
            .ok_or_else(|| SimError::MissingFibEntry {
                node: self.id,
                name: request.search.clone(),
            })?;
        if !neighbors.contains(&entry.next_hop) {
            return Err(SimError::UnresolvedNextHop {
                node: self.id,
                next_hop: entry.next_hop,
            });
        }
        let forwarded = request.forwarded(self.id, PacketKind::Request, None, true);
        Ok(vec![(entry.next_hop, forwarded)])
    }

    /// §4.4 response path: cache insertion, then PIT-driven fan-out or a silent drop.
    fn process_response(&mut self, response: Packet) -> Result<Vec<(NodeId, Packet)>, SimError> {
        let value = response.response_data.ok_or_else(|| SimError::UnsetResponseData {
            node: self.id,
            name: response.search.clone(),
        })?;
        self.cache.add(&response.search, value);

        let Some(targets) = self.pit.take(&response.search) else {
            trace!("{}: dropping unsolicited response for {:?}", self.name, response.search);
            return Ok(Vec::new());
        };

        let mut outgoing = Vec::with_capacity(targets.len());
        for target in targets {
            let forwarded = response.forwarded(self.id, PacketKind::Data, Some(value), true);
            outgoing.push((target, forwarded));
        }
        Ok(outgoing)
    }
}
