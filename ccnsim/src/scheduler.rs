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

//! Discrete-event clock driving [`Network`] one tick at a time.
//!
//! The reference model enrolls client and router co-routines explicitly (`runClient`, `runNode`)
//! before calling `runUntil`. In this re-architecture every node already participates the moment
//! it is added to the [`Network`] (§9's "one node = one OS thread" warning doesn't apply here
//! either way: this is a single-threaded cooperative loop, not a thread per node), so enrollment
//! collapses into topology construction and `Scheduler` is left with exactly the clock.

use crate::{error::SimError, network::Network};

/// Single logical clock advancing in discrete unit ticks from zero.
#[derive(Debug)]
pub struct Scheduler<'n> {
    network: &'n mut Network,
    now: u64,
}

impl<'n> Scheduler<'n> {
    /// Attach a scheduler to `network`, clock starting at zero.
    pub fn new(network: &'n mut Network) -> Self {
        Scheduler { network, now: 0 }
    }

    /// Current simulated time.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advance the clock by exactly one tick, giving every node its one opportunity to act.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.network.step_tick(self.now)?;
        self.now += 1;
        Ok(())
    }

    /// Run until the simulated clock reaches `run_until`. Packets still in flight beyond that time
    /// are discarded along with the rest of the network's transient state.
    pub fn run_until(&mut self, run_until: u64) -> Result<(), SimError> {
        while self.now < run_until {
            self.step()?;
        }
        Ok(())
    }
}
