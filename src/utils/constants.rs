/// File names
pub const DEFAULT_SETTINGS_FILE: &str = "./settings-main.json";
pub const OUTPUT_FILE: &str = "geolocations.png";

/// Settings keys
pub const KEY_INPUT_FOLDER: &str = "input_folder";
pub const KEY_INPUT_FILE: &str = "input_file";
pub const KEY_SKIPROWS: &str = "skiprows";
pub const KEY_SEPARATOR: &str = "separator";
pub const KEY_COLUMNS_OF_INTEREST: &str = "columns_of_interest";
pub const KEY_LOCATION_ID: &str = "location_id";
pub const KEY_OUTPUT_FOLDER: &str = "output_folder";

/// Derived column names
pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Packed location field layout: 8 latitude digits, direction, 10 longitude digits, direction
pub const LATITUDE_DIGITS: usize = 8;
pub const LONGITUDE_DIGITS: usize = 10;
pub const LOCATION_FIELD_WIDTH: usize = LATITUDE_DIGITS + 1 + LONGITUDE_DIGITS + 1;
pub const COORDINATE_DIVISOR: f64 = 1_000_000.0;

/// Field values treated as missing when loading a table
pub const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A", "<NA>",
];

/// Rows echoed to the debug log after each stage
pub const PREVIEW_ROWS: usize = 10;

/// Plot dimensions in pixels
pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 768;
pub const PLOT_MARGIN_FRACTION: f64 = 0.05;
pub const PLOT_MIN_MARGIN: f64 = 1.0;
