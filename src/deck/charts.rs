// deck/charts.rs
use crate::data::models::{IncidentTable, TreeSet, TreePoint};
use crate::deck::spec::{
    Accessor, ColumnLayer, Deck, HeatmapLayer, HexagonLayer, Layer, Tooltip,
};
use crate::domain::affordability::{Affordability, AnnotatedListing};
use serde::Serialize;
use std::collections::BTreeMap;

pub const COLUMN_ELEVATION_SCALE: f64 = 5.0;
pub const COLUMN_RADIUS: f64 = 100.0;
pub const FILL_ALPHA: u8 = 140;

pub const HEX_ELEVATION_RANGE: [f64; 2] = [0.0, 3000.0];

/// Dark to light greens for tree density.
pub const TREE_COLOR_RANGE: [[u8; 3]; 6] = [
    [0, 100, 0],
    [34, 139, 34],
    [50, 205, 50],
    [152, 251, 152],
    [0, 250, 154],
    [32, 178, 170],
];

const PROPERTY_TOOLTIP_HTML: &str = "<b>${price_per_bed}</b> per bed, location: {borough} (<b>{lat}, {lon}</b>), <br/> Nearest metro: <b>{nearest_station}</b>, {distance_between}km away";
const INCIDENT_TOOLTIP_HTML: &str = "<b>{elevationValue}</b> shootings in this area";

/// One listing as the browser sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPoint<'a> {
    pub price: f64,
    pub price_per_bed: f64,
    pub price_per_bed_scale: f64,
    pub lat: f64,
    pub lon: f64,
    pub borough: &'a str,
    pub nearest_station: &'a str,
    pub distance_between: f64,
    pub afford: Affordability,
    pub fill_color: [u8; 4],
}

impl<'a> From<&AnnotatedListing<'a>> for PropertyPoint<'a> {
    fn from(row: &AnnotatedListing<'a>) -> Self {
        let l = row.listing;
        Self {
            price: l.price,
            price_per_bed: l.price_per_bed,
            price_per_bed_scale: l.price_per_bed_scale,
            lat: l.lat,
            lon: l.lon,
            borough: &l.borough,
            nearest_station: &l.nearest_station,
            distance_between: l.distance_between,
            afford: row.affordability,
            fill_color: fill_color(l.distance_between),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncidentPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Column color from transit distance: pink when close, green when far.
///
/// Red and blue follow `100 / distance`, green follows the distance itself.
/// Every channel is clamped to 0..=255 and a zero or negative distance
/// counts as right next to the station.
pub fn fill_color(distance_km: f64) -> [u8; 4] {
    let near = if distance_km > 0.0 {
        100.0 / distance_km
    } else {
        255.0
    };
    let rb = channel(near);
    [rb, channel(distance_km), rb, FILL_ALPHA]
}

fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

fn tooltip_style() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("background", "grey"),
        ("color", "white"),
        ("font-family", "\"Helvetica Neue\", Arial"),
        ("z-index", "10000"),
    ])
}

pub fn property_tooltip() -> Tooltip {
    Tooltip {
        html: PROPERTY_TOOLTIP_HTML.to_string(),
        style: tooltip_style(),
    }
}

pub fn incident_tooltip() -> Tooltip {
    Tooltip {
        html: INCIDENT_TOOLTIP_HTML.to_string(),
        style: tooltip_style(),
    }
}

/// Column per listing: height is price per bed, color is transit distance.
pub fn property_layer<'a>(rows: &[AnnotatedListing<'a>]) -> Layer<PropertyPoint<'a>> {
    Layer::ColumnLayer(ColumnLayer {
        id: "properties".to_string(),
        data: rows.iter().map(PropertyPoint::from).collect(),
        get_position: Accessor::position("lon", "lat"),
        get_elevation: Accessor::field("price_per_bed_scale"),
        elevation_scale: COLUMN_ELEVATION_SCALE,
        radius: COLUMN_RADIUS,
        get_fill_color: Accessor::field("fill_color"),
        pickable: true,
        auto_highlight: true,
    })
}

/// Shooting density binned into hexagons.
pub fn incident_layer(table: &IncidentTable) -> Layer<IncidentPoint> {
    Layer::HexagonLayer(HexagonLayer {
        id: "incidents".to_string(),
        data: table
            .positioned()
            .map(|(lon, lat)| IncidentPoint { lon, lat })
            .collect(),
        get_position: Accessor::position("lon", "lat"),
        auto_highlight: true,
        elevation_scale: 0.0,
        pickable: true,
        elevation_range: HEX_ELEVATION_RANGE,
        extruded: true,
        coverage: 1.0,
    })
}

pub fn tree_layer(trees: &TreeSet) -> Layer<TreePoint> {
    Layer::HeatmapLayer(HeatmapLayer {
        id: "trees".to_string(),
        data: trees.points.clone(),
        opacity: 0.9,
        get_position: Accessor::position("lon", "lat"),
        aggregation: "MEAN",
        color_range: TREE_COLOR_RANGE.to_vec(),
        threshold: 1.0,
        pickable: true,
    })
}

/// The dashboard chart: property columns only.
pub fn property_deck<'a>(rows: &[AnnotatedListing<'a>]) -> Deck<PropertyPoint<'a>> {
    Deck::new(property_layer(rows), Some(property_tooltip()))
}

pub fn incident_deck(table: &IncidentTable) -> Deck<IncidentPoint> {
    Deck::new(incident_layer(table), Some(incident_tooltip()))
}

pub fn tree_deck(trees: &TreeSet) -> Deck<TreePoint> {
    Deck::new(tree_layer(trees), None)
}
