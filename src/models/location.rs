use crate::utils::constants::{LATITUDE_COLUMN, LONGITUDE_COLUMN};
use validator::Validate;

/// A decoded pair of decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct GeoLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One retained row: the selected raw fields plus its decoded location
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub fields: Vec<Option<String>>,
    pub location: GeoLocation,
}

/// Output of the coordinate extractor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocatedTable {
    pub headers: Vec<String>,
    pub records: Vec<GeoRecord>,
}

impl LocatedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows and columns, counting the two derived coordinate columns
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.headers.len() + 2)
    }

    /// Column names including the derived coordinate columns
    pub fn column_names(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .chain([LATITUDE_COLUMN, LONGITUDE_COLUMN])
            .collect()
    }

    pub fn locations(&self) -> impl Iterator<Item = GeoLocation> + '_ {
        self.records.iter().map(|r| r.location)
    }

    /// Render a record the way the debug log shows it
    pub fn format_record(&self, index: usize) -> Option<String> {
        let record = self.records.get(index)?;
        let mut parts: Vec<String> = self
            .headers
            .iter()
            .zip(&record.fields)
            .map(|(name, value)| format!("{}={}", name, value.as_deref().unwrap_or("NaN")))
            .collect();
        parts.push(format!("{}={:.6}", LATITUDE_COLUMN, record.location.latitude));
        parts.push(format!("{}={:.6}", LONGITUDE_COLUMN, record.location.longitude));
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        assert!(GeoLocation::new(51.5074, -0.1278).validate().is_ok());
        assert!(GeoLocation::new(91.0, -0.1278).validate().is_err());
        assert!(GeoLocation::new(0.0, 180.5).validate().is_err());
    }

    #[test]
    fn test_located_table_shape() {
        let table = LocatedTable {
            headers: vec!["id".to_string(), "loc".to_string()],
            records: vec![GeoRecord {
                fields: vec![Some("1".to_string()), None],
                location: GeoLocation::new(36.0, -79.0),
            }],
        };

        assert_eq!(table.shape(), (1, 4));
        assert_eq!(table.column_names(), vec!["id", "loc", "latitude", "longitude"]);
        assert_eq!(
            table.format_record(0).unwrap(),
            "id=1, loc=NaN, latitude=36.000000, longitude=-79.000000"
        );
        assert!(table.format_record(1).is_none());
    }
}
