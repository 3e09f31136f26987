use serde::{Deserialize, Serialize};

use crate::Error;

/// A single historical accident
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Ordinal severity, 1 or above
    pub severity: u8,
}

impl AccidentRecord {
    pub fn new(latitude: f64, longitude: f64, severity: u8) -> Self {
        Self {
            latitude,
            longitude,
            severity,
        }
    }

    /// Checks that the record can take part in aggregation
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] carrying `index` for non-finite or out of
    /// range coordinates and for a zero severity
    pub fn validate(&self, index: usize) -> Result<(), Error> {
        let reason = if !self.latitude.is_finite() || !self.longitude.is_finite() {
            "coordinates must be finite"
        } else if !(-90.0..=90.0).contains(&self.latitude) {
            "latitude out of range"
        } else if !(-180.0..=180.0).contains(&self.longitude) {
            "longitude out of range"
        } else if self.severity == 0 {
            "severity must be 1 or above"
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            index,
            reason: reason.to_string(),
        })
    }
}

/// Collision CSV row, every column optional and kept as text until validated
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAccidentRecord {
    #[serde(rename = "Latitude", alias = "latitude", alias = "lat")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", alias = "longitude", alias = "lon")]
    pub longitude: Option<String>,
    #[serde(rename = "Accident_Severity", alias = "severity")]
    pub severity: Option<String>,
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(|value| value.trim()).filter(|value| !value.is_empty())
}

/// Whole numbers written as floats ("2.0") are accepted
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_severity(value: &str) -> Option<u8> {
    value.parse::<u8>().ok().or_else(|| {
        let float = value.parse::<f64>().ok()?;
        (float.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&float))
            .then_some(float as u8)
    })
}

impl TryFrom<(usize, RawAccidentRecord)> for AccidentRecord {
    type Error = Error;

    fn try_from((index, raw): (usize, RawAccidentRecord)) -> Result<Self, Self::Error> {
        let invalid = |reason: String| Error::Validation { index, reason };
        let coordinate = |field: &str, value: Option<&String>| -> Result<f64, Error> {
            let text = present(value).ok_or_else(|| invalid(format!("missing {field}")))?;
            text.parse::<f64>()
                .map_err(|_| invalid(format!("invalid {field} {text:?}")))
        };

        let latitude = coordinate("latitude", raw.latitude.as_ref())?;
        let longitude = coordinate("longitude", raw.longitude.as_ref())?;
        let severity_text =
            present(raw.severity.as_ref()).ok_or_else(|| invalid("missing severity".into()))?;
        let severity = parse_severity(severity_text)
            .ok_or_else(|| invalid(format!("invalid severity {severity_text:?}")))?;

        let record = AccidentRecord {
            latitude,
            longitude,
            severity,
        };
        record.validate(index)?;
        Ok(record)
    }
}

/// Inclusive latitude/longitude rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn new(min_latitude: f64, max_latitude: f64, min_longitude: f64, max_longitude: f64) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }

    pub fn contains_record(&self, record: &AccidentRecord) -> bool {
        self.contains(record.latitude, record.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(latitude: &str, longitude: &str, severity: &str) -> RawAccidentRecord {
        RawAccidentRecord {
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
            severity: Some(severity.to_string()),
        }
    }

    fn rejection_reason(raw: RawAccidentRecord) -> Option<String> {
        match AccidentRecord::try_from((3, raw)) {
            Err(Error::Validation { index: 3, reason }) => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn raw_record_without_coordinates_is_rejected() {
        let raw = RawAccidentRecord {
            latitude: Some("51.5".to_string()),
            longitude: None,
            severity: Some("2".to_string()),
        };

        match AccidentRecord::try_from((7, raw)) {
            Err(Error::Validation { index, reason }) => {
                assert_eq!(index, 7);
                assert_eq!(reason, "missing longitude");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_cells_count_as_missing() {
        assert_eq!(
            rejection_reason(raw("51.5", "-0.1", "  ")).as_deref(),
            Some("missing severity")
        );
        assert_eq!(
            rejection_reason(raw("", "-0.1", "2")).as_deref(),
            Some("missing latitude")
        );
    }

    #[test]
    fn malformed_cells_are_validation_errors() {
        assert_eq!(
            rejection_reason(raw("51.5", "west", "2")).as_deref(),
            Some("invalid longitude \"west\"")
        );
        assert_eq!(
            rejection_reason(raw("51.5", "-0.1", "2.5")).as_deref(),
            Some("invalid severity \"2.5\"")
        );
        assert_eq!(
            rejection_reason(raw("51.5", "-0.1", "serious")).as_deref(),
            Some("invalid severity \"serious\"")
        );
        assert_eq!(
            rejection_reason(raw("51.5", "-0.1", "300")).as_deref(),
            Some("invalid severity \"300\"")
        );
    }

    #[test]
    fn float_formatted_severity_is_accepted() -> Result<(), Error> {
        let record = AccidentRecord::try_from((0, raw(" 51.5 ", "-0.1", "2.0")))?;
        assert_eq!(record, AccidentRecord::new(51.5, -0.1, 2));
        assert_eq!(
            rejection_reason(raw("51.5", "-0.1", "0")).as_deref(),
            Some("severity must be 1 or above")
        );
        Ok(())
    }

    #[test]
    fn validate_rejects_zero_severity_and_nan() {
        assert!(AccidentRecord::new(51.5, -0.1, 0).validate(0).is_err());
        assert!(AccidentRecord::new(f64::NAN, -0.1, 1).validate(0).is_err());
        assert!(AccidentRecord::new(95.0, -0.1, 1).validate(0).is_err());
        assert!(AccidentRecord::new(51.5, -0.1, 3).validate(0).is_ok());
    }

    #[test]
    fn bounding_box_is_inclusive() {
        let bbox = BoundingBox::new(51.355_055_6, 51.651_715_6, -0.453_256, 0.150_505_13);
        assert!(bbox.contains(51.355_055_6, -0.453_256));
        assert!(bbox.contains(51.5, 0.0));
        assert!(!bbox.contains(51.7, 0.0));
        assert!(!bbox.contains(51.5, 0.2));
    }
}
