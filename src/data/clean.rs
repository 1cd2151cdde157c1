//! CSV cleaning for the three datasets.
//!
//! Each loader takes the raw CSV text and returns typed rows. Schema problems
//! (a required column absent from the header) are errors; bad rows are
//! dropped and counted.

use crate::data::models::{
    Incident, IncidentTable, Listing, ListingSet, LoadStats, TreePoint, TreeSet,
};
use crate::data::DataError;
use csv::StringRecord;
use std::collections::HashMap;

/// Share of monthly income allowed for rent, expressed per yearly salary
/// (0.3 / 12).
pub const SALARY_RATE: f64 = 0.025;

pub const MIN_PRICE_EXCLUSIVE: f64 = 999.0;
pub const MAX_PRICE_EXCLUSIVE: f64 = 10_000.0;

/// NA markers written by common dataframe and spreadsheet tools, including
/// the division error the listings export contains.
const NA_VALUES: &[&str] = &[
    "", "#DIV/0!", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const LISTING_COLUMNS: [&str; 8] = [
    "price",
    "price_per_bed",
    "price_per_bed_scale",
    "lat",
    "lon",
    "borough",
    "nearest_station",
    "distance_between",
];

/// Exact match against the NA markers. Padding is removed by the reader
/// before this is called, not here.
pub fn is_missing(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

fn reader(text: &str, trim: csv::Trim) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(trim)
        .from_reader(text.as_bytes())
}

fn strip_bom(name: &str) -> &str {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    name.trim_start_matches('\u{feff}')
}

fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (strip_bom(name).trim().to_string(), idx))
        .collect()
}

fn require(
    map: &HashMap<String, usize>,
    dataset: &'static str,
    column: &str,
) -> Result<usize, DataError> {
    map.get(column).copied().ok_or_else(|| DataError::MissingColumn {
        dataset,
        column: column.to_string(),
    })
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load the rental listings: drop incomplete rows, keep the price band,
/// derive the salary columns.
pub fn load_listings(text: &str) -> Result<ListingSet, DataError> {
    let mut reader = reader(text, csv::Trim::All);
    let headers = reader.headers()?.clone();
    let map = header_map(&headers);

    let idx: Vec<usize> = LISTING_COLUMNS
        .iter()
        .map(|c| require(&map, "listings", c))
        .collect::<Result<_, _>>()?;

    let mut stats = LoadStats::default();
    let mut listings = Vec::new();

    for result in reader.records() {
        let record = result?;
        stats.rows_read += 1;

        if record.len() < headers.len() || record.iter().any(is_missing) {
            stats.dropped_missing += 1;
            continue;
        }

        let Some(listing) = parse_listing(&record, &idx) else {
            stats.dropped_unparsable += 1;
            continue;
        };

        if !(listing.price > MIN_PRICE_EXCLUSIVE && listing.price < MAX_PRICE_EXCLUSIVE) {
            stats.dropped_price_band += 1;
            continue;
        }

        listings.push(listing);
    }

    stats.rows_kept = listings.len();
    Ok(ListingSet { listings, stats })
}

fn parse_listing(record: &StringRecord, idx: &[usize]) -> Option<Listing> {
    let num = |i: usize| record.get(idx[i]).and_then(parse_number);
    let text = |i: usize| record.get(idx[i]).map(str::to_string);

    let price = num(0)?;
    let price_per_bed = num(1)?;

    Some(Listing {
        price,
        price_per_bed,
        price_per_bed_scale: num(2)?,
        lat: num(3)?,
        lon: num(4)?,
        borough: text(5)?,
        nearest_station: text(6)?,
        distance_between: num(7)?,
        solo_salary: price_per_bed / SALARY_RATE,
        unit_salary: price / SALARY_RATE,
    })
}

/// Lower-case a header and rename longitude/latitude to lon/lat. Nothing else
/// about the name changes.
pub fn normalize_incident_header(name: &str) -> String {
    let lower = strip_bom(name).to_lowercase();
    match lower.as_str() {
        "longitude" => "lon".to_string(),
        "latitude" => "lat".to_string(),
        _ => lower,
    }
}

/// Load the shooting incidents. Every row is kept with its values untouched;
/// rows without usable coordinates simply have no position.
pub fn load_incidents(text: &str) -> Result<IncidentTable, DataError> {
    let mut reader = reader(text, csv::Trim::None);
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_incident_header)
        .collect();

    let map: HashMap<String, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.clone(), i))
        .collect();
    let lat_idx = require(&map, "incidents", "lat")?;
    let lon_idx = require(&map, "incidents", "lon")?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(Incident {
            values: record.iter().map(str::to_string).collect(),
            lat: record.get(lat_idx).and_then(parse_number),
            lon: record.get(lon_idx).and_then(parse_number),
        });
    }

    Ok(IncidentTable { columns, rows })
}

/// Load the tree points. Accepts lat/lon or latitude/longitude headers in any
/// case.
pub fn load_trees(text: &str) -> Result<TreeSet, DataError> {
    let mut reader = reader(text, csv::Trim::All);
    let map: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, name)| (normalize_incident_header(name), i))
        .collect();
    let lat_idx = require(&map, "trees", "lat")?;
    let lon_idx = require(&map, "trees", "lon")?;

    let mut points = Vec::new();
    let mut skipped = 0;
    for result in reader.records() {
        let record = result?;
        let lat = record.get(lat_idx).and_then(parse_number);
        let lon = record.get(lon_idx).and_then(parse_number);
        match (lat, lon) {
            (Some(lat), Some(lon)) => points.push(TreePoint { lat, lon }),
            _ => skipped += 1,
        }
    }

    Ok(TreeSet { points, skipped })
}
