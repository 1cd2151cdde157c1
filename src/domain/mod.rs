pub mod affordability;

pub use affordability::{AffordabilityQuery, AffordabilityView};
