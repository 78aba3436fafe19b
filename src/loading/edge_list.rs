use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::adjacency::validate_weight;
use crate::{Error, TransitNetwork};

/// One edge-list row: `from,to,minutes`.
#[derive(Debug, Deserialize)]
struct RawConnection {
    from: String,
    to: String,
    minutes: i64,
}

/// Reads a CSV edge list with a `from,to,minutes` header.
pub fn network_from_csv_path(path: &Path) -> Result<TransitNetwork, Error> {
    let file = File::open(path)?;
    network_from_csv_reader(file)
}

/// Reads a CSV edge list from any reader.
///
/// A malformed row aborts the load; connections are never silently
/// dropped.
pub fn network_from_csv_reader<R: Read>(reader: R) -> Result<TransitNetwork, Error> {
    let mut network = TransitNetwork::new();
    let mut rows = 0usize;

    for record in csv::Reader::from_reader(reader).deserialize() {
        let row: RawConnection = record.map_err(|e| Error::InvalidData(e.to_string()))?;
        let time = validate_weight(&row.from, &row.to, row.minutes)?;
        network.add_connection(&row.from, &row.to, time);
        rows += 1;
    }

    info!(
        "Built transit network from {rows} edge rows: {} stations, {} connections",
        network.station_count(),
        network.connection_count()
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builds_a_network_from_an_edge_list() {
        let csv = "\
from,to,minutes
Victoria,Green Park,2
Green Park,Victoria,2
Green Park,Oxford Circus,2
";
        let network = network_from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.connection_count(), 3);

        let victoria = network.station_index("Victoria").unwrap();
        let green_park = network.station_index("Green Park").unwrap();
        assert_eq!(network.connection_time(victoria, green_park), Some(2));
    }

    #[test]
    fn rejects_negative_travel_times() {
        let csv = "from,to,minutes\nA,B,-1\n";

        assert!(matches!(
            network_from_csv_reader(csv.as_bytes()),
            Err(Error::InvalidWeight { weight: -1, .. })
        ));
    }

    #[test]
    fn rejects_malformed_rows() {
        let csv = "from,to,minutes\nA,B,soon\n";

        assert!(matches!(
            network_from_csv_reader(csv.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn reads_from_a_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from,to,minutes\nA,B,4\nB,A,4\n").unwrap();

        let network = network_from_csv_path(file.path()).unwrap();
        assert_eq!(network.connection_count(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            network_from_csv_path(Path::new("/nonexistent/network.csv")),
            Err(Error::IoError(_))
        ));
    }
}
