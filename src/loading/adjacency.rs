use std::collections::BTreeMap;

use log::info;

use crate::{Error, Time, TransitNetwork};

/// Builds a network from a station -> neighbor -> travel time mapping.
///
/// Travel times arrive as `i64` so that negative values are rejected
/// instead of wrapping. Stations listed only as neighbors are created
/// too.
pub fn network_from_adjacency(
    adjacency: &BTreeMap<String, BTreeMap<String, i64>>,
) -> Result<TransitNetwork, Error> {
    let mut network = TransitNetwork::new();

    for (station, neighbors) in adjacency {
        network.add_station(station);
        for (neighbor, &weight) in neighbors {
            let time = validate_weight(station, neighbor, weight)?;
            network.add_connection(station, neighbor, time);
        }
    }

    info!(
        "Built transit network: {} stations, {} connections",
        network.station_count(),
        network.connection_count()
    );

    Ok(network)
}

/// Parses the JSON adjacency format, e.g. `{"E": {"KC": 4, "P": 6}}`.
pub fn network_from_json(json: &str) -> Result<TransitNetwork, Error> {
    let adjacency: BTreeMap<String, BTreeMap<String, i64>> =
        serde_json::from_str(json).map_err(|e| Error::InvalidData(e.to_string()))?;

    network_from_adjacency(&adjacency)
}

pub(super) fn validate_weight(from: &str, to: &str, weight: i64) -> Result<Time, Error> {
    Time::try_from(weight).map_err(|_| Error::InvalidWeight {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_network_from_json() {
        let network = network_from_json(
            r#"{
                "W": {"E": 8},
                "E": {"W": 8, "KC": 4, "P": 6},
                "KC": {"E": 4, "P": 1},
                "P": {"E": 6, "KC": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(network.station_count(), 4);
        assert_eq!(network.connection_count(), 8);

        let e = network.station_index("E").unwrap();
        let kc = network.station_index("KC").unwrap();
        assert_eq!(network.connection_time(e, kc), Some(4));
    }

    #[test]
    fn rejects_negative_travel_times() {
        let result = network_from_json(r#"{"A": {"B": -3}}"#);

        match result {
            Err(Error::InvalidWeight { from, to, weight }) => {
                assert_eq!(from, "A");
                assert_eq!(to, "B");
                assert_eq!(weight, -3);
            }
            other => panic!("expected InvalidWeight, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            network_from_json(r#"{"A": "not a map"}"#),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn neighbor_only_stations_are_created() {
        let network = network_from_json(r#"{"A": {"B": 2}}"#).unwrap();

        assert!(network.station_index("B").is_some());
        assert_eq!(network.station_count(), 2);
    }
}
