use serde::Serialize;
use std::collections::HashMap;

/// One cleaned rental listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub price: f64,
    pub price_per_bed: f64,
    pub price_per_bed_scale: f64,
    pub lat: f64,
    pub lon: f64,
    pub borough: String,
    pub nearest_station: String,
    /// Kilometers to the nearest transit station.
    pub distance_between: f64,

    // Derived: yearly income at which the rent is 30% of monthly income.
    pub solo_salary: f64,
    pub unit_salary: f64,
}

/// What happened to the source rows while cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub dropped_missing: usize,
    pub dropped_unparsable: usize,
    pub dropped_price_band: usize,
}

#[derive(Debug, Clone)]
pub struct ListingSet {
    pub listings: Vec<Listing>,
    pub stats: LoadStats,
}

/// A shooting incident row. `values` lines up with `IncidentTable::columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    pub values: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Incident {
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.lon?, self.lat?))
    }
}

#[derive(Debug, Clone)]
pub struct IncidentTable {
    /// Lower-cased headers with longitude/latitude renamed to lon/lat.
    pub columns: Vec<String>,
    pub rows: Vec<Incident>,
}

impl IncidentTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Row counts per distinct value of `name`, largest first.
    pub fn count_by(&self, name: &str) -> Vec<(String, usize)> {
        let Some(idx) = self.column(name) else {
            return Vec::new();
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            if let Some(v) = row.values.get(idx).filter(|v| !v.is_empty()) {
                *counts.entry(v.as_str()).or_default() += 1;
            }
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    pub fn positioned(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().filter_map(Incident::position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreePoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone)]
pub struct TreeSet {
    pub points: Vec<TreePoint>,
    pub skipped: usize,
}
