//! deck.gl JSON building blocks.
//!
//! Serializes to the format `@deck.gl/json` consumes: layer classes are named
//! by an `@@type` key and per-row accessors are `@@=` expressions evaluated
//! against each data row in the browser.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const MAP_PROVIDER: &str = "mapbox";
pub const SATELLITE_STYLE: &str = "mapbox://styles/mapbox/satellite-v9";

/// A per-row accessor expression, e.g. `[lon, lat]` or `price_per_bed_scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor(String);

impl Accessor {
    pub fn field(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn position(lon: &str, lat: &str) -> Self {
        Self(format!("[{lon}, {lat}]"))
    }

    pub fn expression(&self) -> &str {
        &self.0
    }
}

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("@@={}", self.expression()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    /// Camera over the five boroughs, tilted so column heights read.
    pub fn new_york() -> Self {
        Self {
            latitude: 40.65,
            longitude: -74.00,
            zoom: 10.0,
            pitch: 50.0,
            bearing: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub html: String,
    pub style: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@@type")]
pub enum Layer<Row> {
    ColumnLayer(ColumnLayer<Row>),
    HexagonLayer(HexagonLayer<Row>),
    HeatmapLayer(HeatmapLayer<Row>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayer<Row> {
    pub id: String,
    pub data: Vec<Row>,
    pub get_position: Accessor,
    pub get_elevation: Accessor,
    pub elevation_scale: f64,
    pub radius: f64,
    pub get_fill_color: Accessor,
    pub pickable: bool,
    pub auto_highlight: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagonLayer<Row> {
    pub id: String,
    pub data: Vec<Row>,
    pub get_position: Accessor,
    pub auto_highlight: bool,
    pub elevation_scale: f64,
    pub pickable: bool,
    pub elevation_range: [f64; 2],
    pub extruded: bool,
    pub coverage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapLayer<Row> {
    pub id: String,
    pub data: Vec<Row>,
    pub opacity: f64,
    pub get_position: Accessor,
    pub aggregation: &'static str,
    pub color_range: Vec<[u8; 3]>,
    pub threshold: f64,
    pub pickable: bool,
}

/// A complete chart: one or more layers bound to a camera and base map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck<Row> {
    pub layers: Vec<Layer<Row>>,
    pub initial_view_state: ViewState,
    pub map_provider: &'static str,
    pub map_style: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

impl<Row: Serialize> Deck<Row> {
    pub fn new(layer: Layer<Row>, tooltip: Option<Tooltip>) -> Self {
        Self {
            layers: vec![layer],
            initial_view_state: ViewState::new_york(),
            map_provider: MAP_PROVIDER,
            map_style: SATELLITE_STYLE,
            tooltip,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
