use maud::{html, Markup};

pub mod error;
pub mod map;
pub mod raw_table;

pub use error::error_page;
pub use map::deck_map;
pub use raw_table::raw_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}
