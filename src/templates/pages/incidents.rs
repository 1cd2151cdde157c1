use crate::templates::components::{card, deck_map};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn incidents_page(
    deck_json: &str,
    total: usize,
    placed: usize,
    by_borough: &[(String, usize)],
    mapbox_token: Option<&str>,
) -> Markup {
    desktop_layout(
        "Shootings in NYC",
        html! {
            main class="container" {
                h1 { "Police data on shootings in NYC in last year" }
                p {
                    strong { (placed) } " incidents on the map"
                    @if placed < total {
                        " (" (total - placed) " without coordinates)"
                    }
                    "."
                }
                (deck_map("incident-map", deck_json, mapbox_token))
                @if !by_borough.is_empty() {
                    (card("By borough", html! {
                        ul {
                            @for (boro, n) in by_borough {
                                li { (boro) ": " strong { (n) } }
                            }
                        }
                    }))
                }
            }
        },
    )
}
