use crate::config::Config;
use crate::data::datasets::{INCIDENTS_URL, LISTINGS_URL, TREES_URL};
use crate::data::{CsvSource, DataError};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const LISTINGS_CSV: &str = "\
price,price_per_bed,price_per_bed_scale,lat,lon,borough,nearest_station,distance_between,beds
2500,1250,125,40.70,-73.95,Brooklyn,Bedford Av,0.4,2
3000,1000,100,40.75,-73.98,Manhattan,Grand Central,0.2,3
999,999,99.9,40.60,-73.90,Queens,Jamaica,1.2,1
10000,5000,500,40.70,-74.00,Manhattan,Wall St,0.1,2
4000,#DIV/0!,400,40.80,-73.90,Bronx,Fordham,0.9,0
1800,,180,40.60,-73.80,Queens,Flushing,2.0,1
1500,1500,150,40.65,-73.99,Brooklyn,Atlantic Av,0.5,
2200,abc,220,40.70,-73.90,Queens,Astoria,0.3,1
1200,600,60,40.85,-73.88,Bronx,Fordham Rd,1.5,2
";

pub const INCIDENTS_CSV: &str = "\
INCIDENT_KEY,OCCUR_DATE,BORO,Latitude,Longitude
1,01/02/2022,BRONX,40.85,-73.89
2,01/03/2022,BROOKLYN,40.67,-73.94
3,01/04/2022,QUEENS,,
";

pub const TREES_CSV: &str = "\
objectid,Latitude,Longitude
1,40.70,-73.90
2,bad,-73.90
3,40.71,-73.91
";

/// In-memory CSV source that counts fetches.
#[derive(Clone, Default)]
pub struct StaticSource {
    files: Arc<HashMap<String, String>>,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: Arc::new(
                files
                    .iter()
                    .map(|(u, t)| (u.to_string(), t.to_string()))
                    .collect(),
            ),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The three fixture datasets at their default URLs.
    pub fn fixtures() -> Self {
        Self::new(&[
            (LISTINGS_URL, LISTINGS_CSV),
            (INCIDENTS_URL, INCIDENTS_CSV),
            (TREES_URL, TREES_CSV),
        ])
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CsvSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String, DataError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.files.get(url).cloned().ok_or_else(|| DataError::Http {
            status: 404,
            url: url.to_string(),
        })
    }
}

/// App state backed by the fixture datasets. The returned source shares its
/// fetch counter with the one inside the state.
pub fn test_state() -> (AppState, StaticSource) {
    let source = StaticSource::fixtures();
    let state = AppState::new(Config::default(), Box::new(source.clone()));
    (state, source)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
