use std::{collections::BTreeMap, hash::Hash};

use hashbrown::HashMap;
use serde::Serialize;

use crate::NodeId;

/// Aggregated accident statistics for one location
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityStats {
    pub mean_severity_score: f64,
    pub accident_count: u32,
}

/// Exact coordinate pair usable as a hash key
///
/// Coordinates are compared by their bit pattern, `-0.0` is folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl CoordinateKey {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat_bits: normalize_zero(latitude).to_bits(),
            lon_bits: normalize_zero(longitude).to_bits(),
        }
    }

    pub fn latitude(&self) -> f64 {
        f64::from_bits(self.lat_bits)
    }

    pub fn longitude(&self) -> f64 {
        f64::from_bits(self.lon_bits)
    }
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Per-location accident statistics, read-only once built
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityTable<K: Eq + Hash> {
    pub(crate) entries: HashMap<K, SeverityStats>,
}

/// Severity table keyed by the nearest network node
pub type NodeSeverityTable = SeverityTable<NodeId>;

impl<K: Eq + Hash> SeverityTable<K> {
    pub(crate) fn from_entries(entries: HashMap<K, SeverityStats>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &K) -> Option<&SeverityStats> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &SeverityStats)> {
        self.entries.iter()
    }

    pub fn total_accidents(&self) -> u64 {
        self.entries
            .values()
            .map(|stats| u64::from(stats.accident_count))
            .sum()
    }

    /// Number of locations per mean severity, rounded half to even
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn severity_distribution(&self) -> BTreeMap<u32, usize> {
        let mut distribution = BTreeMap::new();
        for stats in self.entries.values() {
            let bucket = stats.mean_severity_score.round_ties_even() as u32;
            *distribution.entry(bucket).or_insert(0) += 1;
        }
        distribution
    }
}

impl<K: Eq + Hash> Default for SeverityTable<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FromIterator<(K, SeverityStats)> for SeverityTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, SeverityStats)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_the_same_key() {
        assert_eq!(CoordinateKey::new(-0.0, 1.0), CoordinateKey::new(0.0, 1.0));
        assert_ne!(CoordinateKey::new(1.0, 1.0), CoordinateKey::new(1.0, 1.000_001));
        assert!((CoordinateKey::new(51.5, -0.12).longitude() + 0.12).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_rounds_half_to_even() {
        let table: SeverityTable<NodeId> = [
            (1, 2.5),
            (2, 3.5),
            (3, 2.4),
            (4, 1.0),
        ]
        .into_iter()
        .map(|(node, score)| {
            (
                node,
                SeverityStats {
                    mean_severity_score: score,
                    accident_count: 1,
                },
            )
        })
        .collect();

        let distribution = table.severity_distribution();
        assert_eq!(distribution.get(&1), Some(&1));
        assert_eq!(distribution.get(&2), Some(&2));
        assert_eq!(distribution.get(&4), Some(&1));
        assert_eq!(table.total_accidents(), 4);
    }
}
