use geolocation_plotter::cli::{run, Cli};
use geolocation_plotter::config::Settings;
use geolocation_plotter::error::ProcessingError;
use geolocation_plotter::processors::CoordinateExtractor;
use geolocation_plotter::readers::TableReader;
use geolocation_plotter::utils::{decode_location, encode_location};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

const SITES_CSV: &str = "\
id,loc,name
1,36000000N0079000000W,Durham
2,,Orphan
3,51507400N0000127800W,London
4,55953300N0003188300W,Edinburgh
5,33868820S0151209290E,Sydney
";

fn write_settings(dir: &Path, input: &Path, output: &Path) -> std::path::PathBuf {
    let settings = json!({
        "input_folder": input.to_str().unwrap(),
        "input_file": "sites.csv",
        "skiprows": 0,
        "separator": ",",
        "columns_of_interest": ["id", "loc"],
        "location_id": "loc",
        "output_folder": output.to_str().unwrap(),
    });
    let path = dir.join("settings-main.json");
    std::fs::write(&path, settings.to_string()).unwrap();
    path
}

fn cli_for(settings: &Path) -> Cli {
    Cli {
        settings: settings.to_path_buf(),
        quiet: false,
    }
}

#[test]
fn test_end_to_end_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();
    std::fs::write(input.join("sites.csv"), SITES_CSV).unwrap();

    let settings_path = write_settings(temp_dir.path(), &input, &output);
    let summary = run(&cli_for(&settings_path)).unwrap();

    assert_eq!(summary.rows_loaded, 5);
    assert_eq!(summary.rows_plotted, 4);
    assert_eq!(summary.output_file, output.join("geolocations.png"));

    let metadata = std::fs::metadata(&summary.output_file).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_extractor_output_for_sample_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sites.csv");
    std::fs::write(&path, SITES_CSV).unwrap();

    let table = TableReader::new().read_table(&path).unwrap();
    let located = CoordinateExtractor::new(vec!["id".to_string(), "loc".to_string()], "loc")
        .extract(&table)
        .unwrap();

    assert_eq!(located.len(), 4);
    assert_eq!(
        located.column_names(),
        vec!["id", "loc", "latitude", "longitude"]
    );

    let durham = located.records[0].location;
    assert!((durham.latitude - 36.0).abs() < 0.000001);
    assert!((durham.longitude - -79.0).abs() < 0.000001);
}

#[test]
fn test_missing_input_folder_stops_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");
    std::fs::create_dir_all(&output).unwrap();

    let settings_path = write_settings(temp_dir.path(), &temp_dir.path().join("absent"), &output);
    let result = run(&cli_for(&settings_path));

    assert!(matches!(
        result,
        Err(ProcessingError::MissingFolder { descriptor, .. }) if descriptor == "input"
    ));
    assert!(!output.join("geolocations.png").exists());
}

#[test]
fn test_malformed_location_writes_no_image() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("sites.csv"),
        "id,loc\n1,36000000N0079000000W\n2,36N079W\n",
    )
    .unwrap();

    let settings_path = write_settings(temp_dir.path(), temp_dir.path(), temp_dir.path());
    let result = run(&cli_for(&settings_path));

    assert!(matches!(result, Err(ProcessingError::InvalidCoordinate(_))));
    assert!(!temp_dir.path().join("geolocations.png").exists());
}

#[test]
fn test_settings_with_header_rows_and_tabs() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("sites.tsv"),
        "site export\nid\tloc\n9\t22906847S0043172897W\n",
    )
    .unwrap();
    let settings = json!({
        "input_folder": temp_dir.path().to_str().unwrap(),
        "input_file": "sites.tsv",
        "skiprows": 1,
        "separator": "\t",
        "columns_of_interest": ["loc", "id"],
        "location_id": "loc",
        "output_folder": temp_dir.path().to_str().unwrap(),
    });
    let settings_path = temp_dir.path().join("settings.json");
    std::fs::write(&settings_path, settings.to_string()).unwrap();

    let loaded = Settings::load(&settings_path).unwrap();
    assert_eq!(loaded.separator_byte().unwrap(), b'\t');

    let summary = run(&cli_for(&settings_path)).unwrap();
    assert_eq!(summary.rows_plotted, 1);
}

#[test]
fn test_round_trip_within_quantization() {
    for (latitude, longitude) in [(0.0, 0.0), (12.3456789, -98.7654321), (-89.999999, 179.999999)] {
        let location = decode_location(&encode_location(latitude, longitude).unwrap()).unwrap();
        assert!((location.latitude - latitude).abs() <= 0.000001);
        assert!((location.longitude - longitude).abs() <= 0.000001);
    }
}
