use crate::error::{ProcessingError, Result};
use crate::models::{GeoRecord, LocatedTable, RowTable};
use crate::utils::constants::PREVIEW_ROWS;
use crate::utils::coordinates::decode_location;
use tracing::debug;

/// Narrows a table to the columns of interest and decodes each row's location field
pub struct CoordinateExtractor {
    columns_of_interest: Vec<String>,
    location_id: String,
}

impl CoordinateExtractor {
    pub fn new(columns_of_interest: Vec<String>, location_id: impl Into<String>) -> Self {
        Self {
            columns_of_interest,
            location_id: location_id.into(),
        }
    }

    pub fn extract(&self, table: &RowTable) -> Result<LocatedTable> {
        let subset = table.select(&self.columns_of_interest)?;
        debug!("{:?}", subset.shape());

        let subset = subset.drop_null(&self.location_id)?;
        debug!("{:?}", subset.shape());

        let location_index = subset
            .column_index(&self.location_id)
            .ok_or_else(|| ProcessingError::MissingColumn(self.location_id.clone()))?;

        let records = subset
            .rows
            .into_iter()
            .map(|fields| -> Result<GeoRecord> {
                let field = fields[location_index].as_deref().unwrap_or_default();
                let location = decode_location(field)?;
                Ok(GeoRecord { fields, location })
            })
            .collect::<Result<Vec<_>>>()?;

        let located = LocatedTable {
            headers: subset.headers,
            records,
        };

        for index in 0..located.len().min(PREVIEW_ROWS) {
            if let Some(line) = located.format_record(index) {
                debug!("{}", line);
            }
        }

        Ok(located)
    }
}
