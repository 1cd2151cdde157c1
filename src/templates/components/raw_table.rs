use crate::domain::affordability::AnnotatedListing;
use maud::{html, Markup};

const HEADERS: [&str; 11] = [
    "price",
    "price_per_bed",
    "price_per_bed_scale",
    "lat",
    "lon",
    "borough",
    "nearest_station",
    "distance_between",
    "solo_salary",
    "unit_salary",
    "afford",
];

/// Collapsible view of the listings currently on the map.
pub fn raw_table(rows: &[AnnotatedListing<'_>], limit: usize) -> Markup {
    let shown = rows.len().min(limit);

    html! {
        details class="card" {
            summary { "Show Raw Data" }
            h3 { "Raw Data" }
            @if shown < rows.len() {
                p class="muted" { "Showing " (shown) " of " (rows.len()) " rows." }
            }
            div class="raw-wrap" {
                table class="raw" {
                    thead {
                        tr {
                            @for h in HEADERS {
                                th { (h) }
                            }
                        }
                    }
                    tbody {
                        @for row in rows.iter().take(limit) {
                            @let l = row.listing;
                            tr {
                                td { (format!("{:.0}", l.price)) }
                                td { (format!("{:.2}", l.price_per_bed)) }
                                td { (format!("{:.2}", l.price_per_bed_scale)) }
                                td { (format!("{:.5}", l.lat)) }
                                td { (format!("{:.5}", l.lon)) }
                                td { (l.borough) }
                                td { (l.nearest_station) }
                                td { (format!("{:.2}", l.distance_between)) }
                                td { (format!("{:.0}", l.solo_salary)) }
                                td { (format!("{:.0}", l.unit_salary)) }
                                td { (row.affordability.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
