use crate::error::{ProcessingError, Result};
use crate::models::GeoLocation;
use crate::utils::constants::{
    COORDINATE_DIVISOR, LATITUDE_DIGITS, LOCATION_FIELD_WIDTH, LONGITUDE_DIGITS,
};
use tracing::warn;
use validator::Validate;

/// Decode the latitude half of a packed location field
///
/// The first 8 characters are micro-degrees; the 9th is the hemisphere flag
/// and only `S` makes the value negative.
///
/// # Examples
/// ```
/// use geolocation_plotter::utils::decode_latitude;
///
/// let latitude = decode_latitude("36000000S0079000000W").unwrap();
/// assert!((latitude - -36.0).abs() < 0.000001);
/// ```
pub fn decode_latitude(field: &str) -> Result<f64> {
    check_width(field)?;

    let value = parse_micro_degrees(&field[..LATITUDE_DIGITS], field)?;
    let direction = field.as_bytes()[LATITUDE_DIGITS];

    if direction == b'S' {
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Decode the longitude half of a packed location field
///
/// Everything between the latitude flag and the final character is
/// micro-degrees; the final character is the flag and only `W` negates.
pub fn decode_longitude(field: &str) -> Result<f64> {
    check_width(field)?;

    let start = LATITUDE_DIGITS + 1;
    let value = parse_micro_degrees(&field[start..field.len() - 1], field)?;
    let direction = field.as_bytes()[field.len() - 1];

    if direction == b'W' {
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Decode a full location field into a pair of decimal degrees
///
/// Values beyond ±90/±180 are kept and plotted, with a warning.
pub fn decode_location(field: &str) -> Result<GeoLocation> {
    let location = GeoLocation::new(decode_latitude(field)?, decode_longitude(field)?);

    if let Err(e) = location.validate() {
        warn!("location field {} decodes out of range: {}", field, e);
    }

    Ok(location)
}

/// Pack decimal degrees into the fixed-width location field format
///
/// Values are rounded to the nearest micro-degree.
pub fn encode_location(latitude: f64, longitude: f64) -> Result<String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Latitude {} is outside [-90, 90]",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Longitude {} is outside [-180, 180]",
            longitude
        )));
    }

    let lat_units = (latitude.abs() * COORDINATE_DIVISOR).round() as u64;
    let lon_units = (longitude.abs() * COORDINATE_DIVISOR).round() as u64;
    let lat_flag = if latitude < 0.0 { 'S' } else { 'N' };
    let lon_flag = if longitude < 0.0 { 'W' } else { 'E' };

    Ok(format!(
        "{:0lat_width$}{}{:0lon_width$}{}",
        lat_units,
        lat_flag,
        lon_units,
        lon_flag,
        lat_width = LATITUDE_DIGITS,
        lon_width = LONGITUDE_DIGITS,
    ))
}

fn check_width(field: &str) -> Result<()> {
    if !field.is_ascii() || field.len() != LOCATION_FIELD_WIDTH {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid location field: '{}'. Expected {} ASCII characters",
            field, LOCATION_FIELD_WIDTH
        )));
    }

    Ok(())
}

fn parse_micro_degrees(digits: &str, field: &str) -> Result<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid digits '{}' in location field '{}'",
            digits, field
        )));
    }

    let units = digits.parse::<u64>().map_err(|_| {
        ProcessingError::InvalidCoordinate(format!(
            "Invalid digits '{}' in location field '{}'",
            digits, field
        ))
    })?;

    Ok(units as f64 / COORDINATE_DIVISOR)
}
