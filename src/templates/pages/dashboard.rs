use crate::domain::{AffordabilityQuery, AffordabilityView};
use crate::domain::affordability::SUGGESTED_SALARY;
use crate::templates::components::{card, deck_map, raw_table};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

const CAPTION: &str = "The elevation of the columns in the above chart indicate the price of the property. The colour gradient indicates how close the nearest metro station is, with darker colours being further away than the lighter pink";

pub struct DashboardVm<'a> {
    pub query: AffordabilityQuery,
    pub view: &'a AffordabilityView<'a>,
    pub deck_json: &'a str,
    pub loaded_at: DateTime<Utc>,
    pub raw_row_limit: usize,
    pub mapbox_token: Option<&'a str>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Rental properties in New York City",
        html! {
            main class="container" {
                h1 { "Rental properties in New York City" }

                (salary_form(&vm.query))

                (card("Affordability", summary(vm)))

                (raw_table(&vm.view.rows, vm.raw_row_limit))

                (deck_map("property-map", vm.deck_json, vm.mapbox_token))

                p class="caption" { (CAPTION) }

                p class="muted" {
                    "Listings loaded " (vm.loaded_at.format("%Y-%m-%d %H:%M UTC").to_string()) ". "
                    a href=(format!("/export.xlsx?{}", vm.query.to_query_string())) { "Download these listings" }
                    " · "
                    a href=(format!("/deck.json?{}", vm.query.to_query_string())) { "Chart JSON" }
                }
            }
        },
    )
}

fn salary_form(query: &AffordabilityQuery) -> Markup {
    let salary = query.salary.yearly();
    let value = (salary != 0.0).then(|| salary.to_string());

    html! {
        form action="/" method="get" class="card" {
            label for="salary" { "Insert your yearly salary" }
            " "
            input
                type="number"
                name="salary"
                id="salary"
                step="any"
                value=[value]
                placeholder=(format!("{SUGGESTED_SALARY:.0}"));
            p {
                label {
                    input
                        type="checkbox"
                        name="affordable_only"
                        checked[query.affordable_only]
                        onchange="this.form.submit()";
                    " show only those properties available to your budget"
                }
            }
            button type="submit" { "Update" }
        }
    }
}

fn summary(vm: &DashboardVm) -> Markup {
    let threshold = vm.query.salary.threshold();

    html! {
        p {
            strong { (vm.view.affordable) } " of " (vm.view.total)
            " listings have a price per bed under "
            strong { "$" (format!("{threshold:.0}")) } " a month."
        }
        @if vm.query.affordable_only {
            p class="muted" { "Showing affordable listings only." }
        }
    }
}
