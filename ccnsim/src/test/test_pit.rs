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

use petgraph::graph::NodeIndex;

use crate::pit::Pit;

fn nid(i: u32) -> NodeIndex<u32> {
    NodeIndex::new(i as usize)
}

#[test]
fn first_request_creates_an_entry() {
    let mut pit = Pit::new();
    let aggregated = pit.insert("data/0", nid(0));
    assert!(!aggregated);
    assert!(pit.contains("data/0"));
}

#[test]
fn duplicate_sender_does_not_grow_the_set_but_still_aggregates() {
    let mut pit = Pit::new();
    pit.insert("data/0", nid(0));
    let aggregated = pit.insert("data/0", nid(0));
    assert!(aggregated);
    let targets = pit.take("data/0").unwrap();
    assert_eq!(targets.len(), 1);
}

#[test]
fn distinct_senders_all_fan_out() {
    let mut pit = Pit::new();
    pit.insert("data/0", nid(0));
    pit.insert("data/0", nid(1));
    let targets = pit.take("data/0").unwrap();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&nid(0)) && targets.contains(&nid(1)));
}

#[test]
fn fan_out_cleans_the_entry() {
    let mut pit = Pit::new();
    pit.insert("data/0", nid(0));
    assert!(pit.take("data/0").is_some());
    assert!(!pit.contains("data/0"));
    assert!(pit.take("data/0").is_none());
}
