use crate::error::{ProcessingError, Result};
use crate::models::GeoLocation;
use crate::utils::constants::{
    LATITUDE_COLUMN, LONGITUDE_COLUMN, PLOT_HEIGHT, PLOT_MARGIN_FRACTION, PLOT_MIN_MARGIN,
    PLOT_WIDTH,
};
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Draws longitude against latitude as a PNG scatter plot
pub struct ScatterPlotter {
    width: u32,
    height: u32,
    point_size: i32,
}

impl ScatterPlotter {
    pub fn new() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            point_size: 3,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Render one point per location, overwriting `path`
    pub fn render(&self, locations: &[GeoLocation], path: &Path) -> Result<()> {
        debug!("writing to {}", path.display());
        let (x_range, y_range) = axis_ranges(locations);

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc(LONGITUDE_COLUMN)
            .y_desc(LATITUDE_COLUMN)
            .draw()
            .map_err(plot_error)?;

        chart
            .draw_series(PointSeries::of_element(
                locations.iter().map(|l| (l.longitude, l.latitude)),
                self.point_size,
                BLUE.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;

        Ok(())
    }
}

impl Default for ScatterPlotter {
    fn default() -> Self {
        Self::new()
    }
}

/// Data extents padded on each side; an empty set shows the whole globe
pub fn axis_ranges(locations: &[GeoLocation]) -> (Range<f64>, Range<f64>) {
    if locations.is_empty() {
        return (-180.0..180.0, -90.0..90.0);
    }

    let (min_lon, max_lon, min_lat, max_lat) = locations.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_lon, max_lon, min_lat, max_lat), l| {
            (
                min_lon.min(l.longitude),
                max_lon.max(l.longitude),
                min_lat.min(l.latitude),
                max_lat.max(l.latitude),
            )
        },
    );

    (padded(min_lon, max_lon), padded(min_lat, max_lat))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let margin = ((max - min) * PLOT_MARGIN_FRACTION).max(PLOT_MIN_MARGIN);
    (min - margin)..(max + margin)
}

fn plot_error<E: Display>(e: E) -> ProcessingError {
    ProcessingError::Plot(e.to_string())
}
