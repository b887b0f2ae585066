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

//! Append-only per-node time series, read by external exporters once a run finishes.

use serde::{Deserialize, Serialize};

use crate::{packet::Packet, types::Name};

/// History kept for a single node across a run.
///
/// Non-client nodes only ever populate `queue_len`. Clients only ever populate `requests`,
/// `responses`, and `received`. Nothing reads or writes these fields mid-run except the node's own
/// step; external exporters only read them after the scheduler finishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeHistory {
    /// `(time, queue_size)` sampled once per tick, for non-client nodes.
    pub queue_len: Vec<(u64, usize)>,
    /// `(name, time)` stamped when a client emits a request.
    pub requests: Vec<(Name, u64)>,
    /// `(name, time)` stamped when a client receives a response.
    pub responses: Vec<(Name, u64)>,
    /// Full response packets received by a client, in arrival order.
    pub received: Vec<Packet>,
}

impl NodeHistory {
    /// Construct an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}
