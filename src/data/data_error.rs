use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DataError {
    Network(String),
    Http { status: u16, url: String },
    Csv(String),
    MissingColumn { dataset: &'static str, column: String },
    Poisoned(&'static str),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Network(msg) => write!(f, "Network error: {msg}"),
            DataError::Http { status, url } => write!(f, "HTTP {status} fetching {url}"),
            DataError::Csv(msg) => write!(f, "CSV parse error: {msg}"),
            DataError::MissingColumn { dataset, column } => {
                write!(f, "{dataset} dataset is missing column '{column}'")
            }
            DataError::Poisoned(name) => write!(f, "{name} cache lock poisoned"),
        }
    }
}

impl Error for DataError {}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e.to_string())
    }
}
