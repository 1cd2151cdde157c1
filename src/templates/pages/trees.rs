use crate::templates::components::deck_map;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn trees_page(deck_json: &str, points: usize, mapbox_token: Option<&str>) -> Markup {
    desktop_layout(
        "Tree coverage in the city",
        html! {
            main class="container" {
                h1 { "Tree coverage in the city" }
                p class="muted" { (points) " trees mapped." }
                (deck_map("tree-map", deck_json, mapbox_token))
            }
        },
    )
}
