use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::models::GeoLocation;
use crate::plotting::ScatterPlotter;
use crate::processors::CoordinateExtractor;
use crate::readers::TableReader;
use crate::utils::constants::PREVIEW_ROWS;
use std::path::PathBuf;
use tracing::debug;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_plotted: usize,
    pub output_file: PathBuf,
}

/// Load settings, load data, extract coordinates, plot, save
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let settings = Settings::load(&cli.settings)?;
    run_with_settings(&settings)
}

pub fn run_with_settings(settings: &Settings) -> Result<RunSummary> {
    let reader = TableReader::new()
        .with_separator(settings.separator_byte()?)
        .with_skip_rows(settings.skiprows);
    let data = reader.read_table(&settings.input_path())?;

    debug!("{:?}", data.shape());
    for (index, item) in data.headers.iter().enumerate() {
        debug!("{} : {}", index, item);
    }
    for index in 0..data.len().min(PREVIEW_ROWS) {
        if let Some(line) = data.format_row(index) {
            debug!("{}", line);
        }
    }

    let extractor = CoordinateExtractor::new(
        settings.columns_of_interest.clone(),
        settings.location_id.clone(),
    );
    let located = extractor.extract(&data)?;

    let locations: Vec<GeoLocation> = located.locations().collect();
    let output_file = settings.output_path();
    ScatterPlotter::new().render(&locations, &output_file)?;

    debug!("done");

    Ok(RunSummary {
        rows_loaded: data.len(),
        rows_plotted: located.len(),
        output_file,
    })
}
