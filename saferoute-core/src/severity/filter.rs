use itertools::{Itertools, MinMaxResult};
use log::info;

use crate::model::{AccidentRecord, BoundingBox};

/// Keeps the records inside `bbox`, bounds inclusive
pub fn filter_records(records: &[AccidentRecord], bbox: &BoundingBox) -> Vec<AccidentRecord> {
    let kept: Vec<AccidentRecord> = records
        .iter()
        .filter(|record| bbox.contains_record(record))
        .copied()
        .collect();

    let dropped = records.len() - kept.len();
    if dropped > 0 {
        info!("Dropped {dropped} of {} accidents outside the bounding box", records.len());
    }
    kept
}

/// Smallest bounding box containing every record, `None` for no records
pub fn coordinate_bounds(records: &[AccidentRecord]) -> Option<BoundingBox> {
    let (min_latitude, max_latitude) = min_max(records.iter().map(|r| r.latitude))?;
    let (min_longitude, max_longitude) = min_max(records.iter().map(|r| r.longitude))?;

    Some(BoundingBox::new(
        min_latitude,
        max_latitude,
        min_longitude,
        max_longitude,
    ))
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some((value, value)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_records() {
        let records = [
            AccidentRecord::new(51.40, -0.30, 1),
            AccidentRecord::new(51.60, 0.10, 2),
            AccidentRecord::new(51.50, -0.45, 3),
        ];
        let bounds = coordinate_bounds(&records);
        assert_eq!(bounds, Some(BoundingBox::new(51.40, 51.60, -0.45, 0.10)));
        assert_eq!(coordinate_bounds(&[]), None);
    }

    #[test]
    fn filter_keeps_inside_records_in_order() {
        let bbox = BoundingBox::new(51.0, 52.0, -1.0, 1.0);
        let records = [
            AccidentRecord::new(51.5, 0.0, 1),
            AccidentRecord::new(53.0, 0.0, 2),
            AccidentRecord::new(52.0, 1.0, 3),
        ];

        let kept = filter_records(&records, &bbox);
        assert_eq!(kept, vec![records[0], records[2]]);
    }
}
