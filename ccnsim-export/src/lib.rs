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

//! CSV export of [`ccnsim`] run history, the out-of-scope "CSV export of histories" collaborator
//! named in §1/§6 of the core's specification.
//!
//! Layout and column names mirror the Python prototype's `list_to_csv` helper
//! (`original_source/ccn_sim/simulations/util.py`) and `Router`/`Client` `write_*` methods
//! (`original_source/ccn_sim/node_sim.py`): one file per node per series, a header row, and one
//! row per sample, under `output/<sim_path>/`.

use std::{fs, path::Path};

use log::debug;
use thiserror::Error;

use ccnsim::prelude::*;

/// Errors raised while writing history to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A CSV file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Write every node's history as CSV under `output_dir/<sim_path>/`.
///
/// Non-client nodes get `<name>_queue.csv` (`time,queue_size`); clients get
/// `<name>_requests.csv` and `<name>_responses.csv` (both `path,time`). A node with no samples in
/// a given series (e.g. a forwarder's `requests`, which is always empty) is skipped rather than
/// writing an empty file.
pub fn export_history(
    net: &Network,
    output_dir: impl AsRef<Path>,
    sim_path: &str,
) -> Result<(), ExportError> {
    let dir = output_dir.as_ref().join(sim_path);
    fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_string_lossy().into_owned(),
        source,
    })?;

    for id in net.node_ids() {
        let node = net
            .node(id)
            .expect("id was just drawn from the network's own node set");
        let history = node.history();

        if !history.queue_len.is_empty() {
            write_csv(
                &dir.join(format!("{}_queue.csv", node.name)),
                ["time", "queue_size"],
                history.queue_len.iter().map(|&(t, q)| [t.to_string(), q.to_string()]),
            )?;
        }
        if !history.requests.is_empty() {
            write_csv(
                &dir.join(format!("{}_requests.csv", node.name)),
                ["path", "time"],
                history
                    .requests
                    .iter()
                    .map(|(p, t)| [p.clone(), t.to_string()]),
            )?;
        }
        if !history.responses.is_empty() {
            write_csv(
                &dir.join(format!("{}_responses.csv", node.name)),
                ["path", "time"],
                history
                    .responses
                    .iter()
                    .map(|(p, t)| [p.clone(), t.to_string()]),
            )?;
        }
    }

    debug!("wrote history for {} node(s) to {}", net.len(), dir.display());
    Ok(())
}

fn write_csv(
    path: &Path,
    header: [&str; 2],
    rows: impl Iterator<Item = [String; 2]>,
) -> Result<(), ExportError> {
    let to_export_err = |source: csv::Error| ExportError::Write {
        path: path.to_string_lossy().into_owned(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_export_err)?;
    writer.write_record(header).map_err(to_export_err)?;
    for row in rows {
        writer.write_record(row).map_err(to_export_err)?;
    }
    writer.flush().map_err(|source| ExportError::Write {
        path: path.to_string_lossy().into_owned(),
        source: csv::Error::from(source),
    })?;
    Ok(())
}
