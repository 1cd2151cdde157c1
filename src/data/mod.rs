pub mod cache;
pub mod clean;
mod data_error;
pub mod datasets;
pub mod models;
mod source;

pub use data_error::DataError;
pub use datasets::{DatasetUrls, Datasets};
pub use source::{CsvSource, HttpSource};
