//! Station graph with a name index

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::Time;

/// A station in the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique station name
    pub name: String,
}

/// Fixed transit network: a directed station graph with travel times on
/// its connections, plus a name-to-node index for lookups.
///
/// Symmetric networks (the usual case for metro data) carry one
/// connection per direction; routing follows whatever directed
/// connections are present and does not assume symmetry.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    pub(crate) graph: DiGraph<Station, Time>,
    index: HashMap<String, NodeIndex>,
}

impl TransitNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station, returning the existing node when the name is
    /// already present.
    pub fn add_station(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.index.get(name) {
            return index;
        }
        let index = self.graph.add_node(Station {
            name: name.to_string(),
        });
        self.index.insert(name.to_string(), index);
        index
    }

    /// Adds a directed connection between two stations, creating the
    /// stations as needed.
    pub fn add_connection(&mut self, from: &str, to: &str, time: Time) {
        let from = self.add_station(from);
        let to = self.add_station(to);
        self.graph.add_edge(from, to, time);
    }

    pub fn station_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn station(&self, index: NodeIndex) -> Option<&Station> {
        self.graph.node_weight(index)
    }

    pub fn station_name(&self, index: NodeIndex) -> Option<&str> {
        self.station(index).map(|s| s.name.as_str())
    }

    /// All station handles, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Travel time of the direct connection `from -> to`, if present.
    pub fn connection_time(&self, from: NodeIndex, to: NodeIndex) -> Option<Time> {
        self.graph
            .find_edge(from, to)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }
}
