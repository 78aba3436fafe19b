//! Building transit networks from external data
//!
//! Two ingestion formats: a JSON adjacency map (station to neighbor to
//! travel time) and a CSV edge list. Both validate travel times on the
//! way in; routing itself assumes the network is well formed.

mod adjacency;
mod edge_list;

pub use adjacency::{network_from_adjacency, network_from_json};
pub use edge_list::{network_from_csv_path, network_from_csv_reader};
