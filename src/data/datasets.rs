// datasets.rs
use crate::data::cache::{LoadOnce, Loaded};
use crate::data::clean::{load_incidents, load_listings, load_trees};
use crate::data::models::{IncidentTable, ListingSet, TreeSet};
use crate::data::{CsvSource, DataError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub const LISTINGS_URL: &str = "https://raw.githubusercontent.com/muumrar/columns/main/nylatlonv4.csv";
pub const INCIDENTS_URL: &str = "https://raw.githubusercontent.com/muumrar/columns/main/NYPD_Shooting_Incident_Data__Year_To_Date_Clean.csv";
pub const TREES_URL: &str =
    "https://raw.githubusercontent.com/muumrar/columns/main/Forestry_Tree_Points_clean.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetUrls {
    pub listings: String,
    pub incidents: String,
    pub trees: String,
}

impl Default for DatasetUrls {
    fn default() -> Self {
        Self {
            listings: LISTINGS_URL.to_string(),
            incidents: INCIDENTS_URL.to_string(),
            trees: TREES_URL.to_string(),
        }
    }
}

/// The three datasets, each fetched on first use and then held for the life
/// of the process.
pub struct Datasets {
    source: Box<dyn CsvSource>,
    urls: DatasetUrls,
    listings: LoadOnce<ListingSet>,
    incidents: LoadOnce<IncidentTable>,
    trees: LoadOnce<TreeSet>,
}

impl Datasets {
    pub fn new(source: Box<dyn CsvSource>, urls: DatasetUrls) -> Self {
        Self {
            source,
            urls,
            listings: LoadOnce::new("listings"),
            incidents: LoadOnce::new("incidents"),
            trees: LoadOnce::new("trees"),
        }
    }

    pub fn listings(&self) -> Result<Arc<Loaded<ListingSet>>, DataError> {
        self.listings.get_or_load(|| {
            let start = Instant::now();
            let text = self.source.fetch(&self.urls.listings)?;
            let set = load_listings(&text)?;

            let s = &set.stats;
            info!(
                rows_read = s.rows_read,
                rows_kept = s.rows_kept,
                dropped_missing = s.dropped_missing,
                dropped_price_band = s.dropped_price_band,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "✅ listings loaded"
            );
            if s.dropped_unparsable > 0 {
                warn!(rows = s.dropped_unparsable, "listings rows with non-numeric fields dropped");
            }
            Ok(set)
        })
    }

    pub fn incidents(&self) -> Result<Arc<Loaded<IncidentTable>>, DataError> {
        self.incidents.get_or_load(|| {
            let text = self.source.fetch(&self.urls.incidents)?;
            let table = load_incidents(&text)?;

            let placed = table.positioned().count();
            info!(rows = table.rows.len(), placed, "✅ incidents loaded");
            Ok(table)
        })
    }

    pub fn trees(&self) -> Result<Arc<Loaded<TreeSet>>, DataError> {
        self.trees.get_or_load(|| {
            let text = self.source.fetch(&self.urls.trees)?;
            let set = load_trees(&text)?;

            info!(points = set.points.len(), skipped = set.skipped, "✅ trees loaded");
            Ok(set)
        })
    }

    /// Forget every cached dataset; the next access refetches.
    pub fn invalidate(&self) -> Result<(), DataError> {
        self.listings.invalidate()?;
        self.incidents.invalidate()?;
        self.trees.invalidate()?;
        Ok(())
    }
}
