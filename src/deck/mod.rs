pub mod charts;
pub mod spec;

pub use charts::{incident_deck, property_deck, tree_deck};
pub use spec::Deck;
