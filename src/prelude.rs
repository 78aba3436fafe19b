// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{
    network_from_adjacency, network_from_csv_path, network_from_csv_reader, network_from_json,
};
pub use crate::model::{Station, TransitNetwork};
pub use crate::routing::{
    RouteResult, ShortestPathTree, find_route, one_to_many_travel_times, shortest_path_tree,
    travel_time_matrix, travel_times,
};

// Core scalar types
pub use crate::StationIndex;
pub use crate::Time;
