use std::hash::Hash;

use geo::Point;
use hashbrown::HashMap;
use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    Error, NodeId, RoadGraph,
    model::{AccidentRecord, CoordinateKey, NodeSeverityTable, SeverityStats, SeverityTable},
};

/// Groups records by their exact coordinate pair
///
/// # Errors
///
/// Returns [`Error::Validation`] for the first malformed record
pub fn build_severity_table(
    records: &[AccidentRecord],
) -> Result<SeverityTable<CoordinateKey>, Error> {
    build_severity_table_by(records, |record| {
        CoordinateKey::new(record.latitude, record.longitude)
    })
}

/// Groups records by a caller supplied key
///
/// `accident_count` is the group size and `mean_severity_score` the mean of
/// the group's severities. The result does not depend on record order.
///
/// # Errors
///
/// Returns [`Error::Validation`] for the first malformed record
pub fn build_severity_table_by<K, F>(
    records: &[AccidentRecord],
    key: F,
) -> Result<SeverityTable<K>, Error>
where
    K: Eq + Hash,
    F: Fn(&AccidentRecord) -> K,
{
    validate_records(records)?;
    Ok(aggregate(records.iter().map(|record| (key(record), record.severity))))
}

/// Keys every record by its nearest network node, then aggregates
///
/// # Errors
///
/// Returns [`Error::Validation`] for the first malformed record, or when the
/// graph has no node to snap to
pub fn snap_severity_table(
    graph: &RoadGraph,
    records: &[AccidentRecord],
) -> Result<NodeSeverityTable, Error> {
    validate_records(records)?;
    if graph.is_empty() && !records.is_empty() {
        return Err(Error::Validation {
            index: 0,
            reason: "road network is empty, nothing to snap to".to_string(),
        });
    }

    let snapped: Vec<(NodeId, u8)> = records
        .par_iter()
        .filter_map(|record| {
            let point = Point::new(record.longitude, record.latitude);
            let (idx, meters) = graph.nearest_node(&point)?;
            let node = graph.node(idx)?;
            trace!(
                "Accident at ({}, {}) snapped to node {} ({meters:.1} m)",
                record.latitude, record.longitude, node.id
            );
            Some((node.id, record.severity))
        })
        .collect();

    let table = aggregate(snapped);
    debug!(
        "Snapped {} accidents onto {} network nodes",
        records.len(),
        table.len()
    );
    Ok(table)
}

fn validate_records(records: &[AccidentRecord]) -> Result<(), Error> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| record.validate(index))
}

#[allow(clippy::cast_precision_loss)]
fn aggregate<K, I>(keyed: I) -> SeverityTable<K>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, u8)>,
{
    // Integer sums keep the mean independent of summation order
    let mut groups: HashMap<K, (u64, u32)> = HashMap::new();
    for (key, severity) in keyed {
        let (sum, count) = groups.entry(key).or_insert((0, 0));
        *sum += u64::from(severity);
        *count += 1;
    }

    SeverityTable::from_entries(
        groups
            .into_iter()
            .map(|(key, (sum, count))| {
                let stats = SeverityStats {
                    mean_severity_score: sum as f64 / f64::from(count),
                    accident_count: count,
                };
                (key, stats)
            })
            .collect(),
    )
}
