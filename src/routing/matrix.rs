//! Batch travel-time computations

use petgraph::graph::NodeIndex;
use rayon::prelude::*;

use crate::routing::dijkstra::travel_times;
use crate::{Time, TransitNetwork};

/// Travel times from `start` to each of `targets`.
///
/// One full search from `start`; `None` marks unreachable targets.
pub fn one_to_many_travel_times(
    network: &TransitNetwork,
    start: NodeIndex,
    targets: &[NodeIndex],
) -> Vec<Option<Time>> {
    let times = travel_times(network, start, None, None);
    targets
        .iter()
        .map(|target| times.get(target).copied())
        .collect()
}

/// Full station-to-station travel-time matrix.
///
/// One search per source station, rows computed in parallel. Row and
/// column order follows [`TransitNetwork::stations`].
pub fn travel_time_matrix(network: &TransitNetwork) -> Vec<Vec<Option<Time>>> {
    let stations: Vec<NodeIndex> = network.stations().collect();

    stations
        .par_iter()
        .map(|&start| one_to_many_travel_times(network, start, &stations))
        .collect()
}
